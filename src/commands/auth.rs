//! Account and session subcommands.

use clap::Args;

use sentinel_auth::SessionManager;
use sentinel_auth::credential;
use sentinel_core::error::AppError;

/// Arguments for signup
#[derive(Debug, Args)]
pub struct SignupArgs {
    /// Full name
    #[arg(long)]
    pub name: String,
    /// Email address
    #[arg(long)]
    pub email: String,
    /// Password (prompted when omitted)
    #[arg(long)]
    pub password: Option<String>,
}

/// Arguments for login
#[derive(Debug, Args)]
pub struct LoginArgs {
    /// Email address
    #[arg(long)]
    pub email: String,
    /// Password (prompted when omitted)
    #[arg(long)]
    pub password: Option<String>,
}

/// Register a new account after validating every field.
pub async fn signup(session: &SessionManager, args: SignupArgs) -> Result<(), AppError> {
    credential::validate_full_name(&args.name)?;
    credential::validate_email(&args.email)?;

    let (password, confirm) = match args.password {
        Some(p) => (p.clone(), p),
        None => (
            prompt_password("Password")?,
            prompt_password("Confirm password")?,
        ),
    };

    let check = credential::check_password(&password);
    if let Some(error) = check.error {
        eprintln!("Password strength: {}", check.strength.label());
        return Err(error.into());
    }
    credential::validate_password_match(&password, &confirm)?;

    session.signup(&args.name, &args.email, &password).await?;
    println!("Account registered. You can now sign in.");
    Ok(())
}

/// Sign in and open a session.
pub async fn login(session: &SessionManager, args: LoginArgs) -> Result<(), AppError> {
    credential::validate_email(&args.email)?;

    let password = match args.password {
        Some(p) => p,
        None => prompt_password("Password")?,
    };

    session.login(&args.email, &password).await?;

    if let Some(account) = session.current().current_account {
        println!("Signed in as {} <{}>.", account.full_name, account.email);
    }
    Ok(())
}

/// Sign out. Succeeds even without an open session.
pub async fn logout(session: &SessionManager) -> Result<(), AppError> {
    session.logout().await;
    println!("Signed out.");
    Ok(())
}

/// Print the current session.
pub fn status(session: &SessionManager) -> Result<(), AppError> {
    let state = session.current();
    match state.current_account {
        Some(account) => {
            println!("Signed in as {} <{}>.", account.full_name, account.email);
            println!(
                "Detection complete: {}",
                if state.detection_complete { "yes" } else { "no" }
            );
        }
        None => println!("Not signed in."),
    }
    Ok(())
}

fn prompt_password(prompt: &str) -> Result<String, AppError> {
    dialoguer::Password::new()
        .with_prompt(prompt)
        .interact()
        .map_err(|e| AppError::internal(format!("Input error: {e}")))
}
