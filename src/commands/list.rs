use colored::Colorize;
use tabled::Tabled;

use crate::cli::{ListArgs, OutputFormat};
use crate::client::RosterClient;
use crate::config::Config;
use crate::error::Result;
use crate::output;
use crate::pager::Pager;
use crate::types::User;

#[derive(Tabled)]
struct UserRow {
    #[tabled(rename = "ID")]
    id: u64,
    #[tabled(rename = "First Name")]
    first_name: String,
    #[tabled(rename = "Last Name")]
    last_name: String,
    #[tabled(rename = "Email")]
    email: String,
    #[tabled(rename = "Department")]
    department: String,
}

impl From<&User> for UserRow {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            email: output::truncate(&user.email, 40),
            department: user.department.clone(),
        }
    }
}

/// One-shot listing for scripting: fetch, map, print a page (or everything).
pub async fn run(client: &RosterClient, config: &Config, args: ListArgs) -> Result<()> {
    let remote = client.fetch_users().await?;
    let department = config.department();
    let users: Vec<User> = remote
        .into_iter()
        .map(|r| User::from_remote(r, &department))
        .collect();

    let mut pager = Pager::new(config.page_size());
    pager.select(args.page);

    let visible = if args.all {
        &users[..]
    } else {
        pager.slice(&users)
    };
    output::print_table(visible, |u| UserRow::from(u));

    if !args.all
        && !output::is_quiet()
        && !matches!(output::format(), OutputFormat::Json)
    {
        let footer = format!(
            "page {} of {} · {} users",
            pager.page(),
            pager.page_count(users.len()),
            users.len()
        );
        println!("{}", footer.bright_black());
    }

    Ok(())
}
