//! Notification feed handler.

use chrono::Utc;
use tabled::Tabled;

use alarmdesk_core::{Desk, Notification, time_ago};

use crate::cli::{GlobalOpts, NotificationsArgs, NotificationsCommand};
use crate::error::CliError;
use crate::output;

#[derive(Tabled)]
struct NotificationRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "When")]
    when: String,
    #[tabled(rename = "Level")]
    level: String,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Message")]
    message: String,
    #[tabled(rename = "Read")]
    read: &'static str,
}

impl From<&Notification> for NotificationRow {
    fn from(n: &Notification) -> Self {
        Self {
            id: n.id.to_string(),
            when: time_ago(n.timestamp, Utc::now()),
            level: n.level.to_string(),
            title: n.title.clone(),
            message: n.message.clone(),
            read: if n.read { "yes" } else { "no" },
        }
    }
}

pub fn handle(desk: &Desk, args: NotificationsArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        NotificationsCommand::List { unread } => {
            let mut feed = desk.store().notifications();
            if unread {
                feed.retain(|n| !n.read);
            }
            let out = output::render_list(
                global.format(),
                &feed,
                |n| NotificationRow::from(&**n),
                |n| n.id.to_string(),
            )?;
            output::print_output(&out, global.quiet);
            Ok(())
        }
    }
}
