use crate::app::App;
use crate::client::RosterClient;
use crate::config::Config;
use crate::error::Result;
use crate::tui::Tui;
use crate::types::User;

/// The interactive screen: seed the roster with the one initial fetch, then
/// hand the state to the terminal loop. A failed fetch is not fatal; the
/// screen opens empty with the error banner set.
pub async fn run(client: &RosterClient, config: &Config) -> Result<()> {
    let mut app = App::new(config.page_size());
    let department = config.department();

    match client.fetch_users().await {
        Ok(remote) => app.seed(
            remote
                .into_iter()
                .map(|r| User::from_remote(r, &department))
                .collect(),
        ),
        Err(e) => app.set_error(format!("Failed to fetch users: {e}")),
    }

    let mut tui = Tui::new()?;
    tui.run(&mut app)
}
