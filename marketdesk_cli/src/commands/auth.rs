use anyhow::Result;
use clap::{Args, Subcommand};
use marketdesk_lib::{Profile, Session, SessionStore};

#[derive(Args)]
pub struct AuthArgs {
    #[command(subcommand)]
    pub command: AuthCommand,
}

#[derive(Subcommand)]
pub enum AuthCommand {
    /// Save a staff token (and optional profile) for subsequent commands
    Login(LoginArgs),
    /// Clear the persisted session
    Logout,
    /// Show who the persisted session belongs to
    Whoami,
}

#[derive(Args)]
pub struct LoginArgs {
    /// Bearer token issued by the backend
    #[arg(long)]
    pub token: String,

    /// Staff account id
    #[arg(long)]
    pub id: Option<i64>,

    /// Staff display name
    #[arg(long)]
    pub name: Option<String>,

    /// Staff email
    #[arg(long)]
    pub email: Option<String>,
}

pub fn run(args: &AuthArgs, store: &SessionStore) -> Result<()> {
    match &args.command {
        AuthCommand::Login(login) => {
            let profile = match (login.id, &login.name, &login.email) {
                (Some(id), Some(name), Some(email)) => Some(Profile {
                    id,
                    name: name.clone(),
                    email: email.clone(),
                }),
                _ => None,
            };
            store.save(&Session {
                token: login.token.clone(),
                profile,
            })?;
            println!("Session saved to {}", store.path().display());
        }
        AuthCommand::Logout => {
            store.clear()?;
            println!("Session cleared");
        }
        AuthCommand::Whoami => match store.load()? {
            Some(session) => match session.profile {
                Some(profile) => println!("{} <{}> (id {})", profile.name, profile.email, profile.id),
                None => println!("Logged in (no profile saved)"),
            },
            None => println!("Not logged in"),
        },
    }
    Ok(())
}
