use anyhow::Result;
use owo_colors::OwoColorize;
use pitchside_core::Role;
use pitchside_core::form;
use tracing::debug;

use crate::app::App;
use crate::utils::tui::{create_spinner, password_or_prompt, value_or_prompt};

pub async fn login(email: Option<String>, password: Option<String>) -> Result<()> {
    let mut app = App::load()?;

    let email = value_or_prompt(email, "Email")?;
    let password = password_or_prompt(password, "Password")?;
    form::validate_login(&email, &password)?;

    let spinner = create_spinner("Signing in".to_string());
    let result = app.session.sign_in(&email, &password).await;
    spinner.finish_and_clear();

    match result {
        Ok(user) => {
            println!("{}", format!("Signed in as {}", user.name).green());
            Ok(())
        }
        Err(e) => {
            debug!("sign in failed: {}", e);
            anyhow::bail!("Invalid email or password")
        }
    }
}

pub async fn register(
    name: Option<String>,
    email: Option<String>,
    role: Option<Role>,
) -> Result<()> {
    let mut app = App::load()?;

    let name = value_or_prompt(name, "Full name")?;
    let email = value_or_prompt(email, "Email")?;
    let password = password_or_prompt(None, "Password")?;
    let confirm_password = password_or_prompt(None, "Confirm password")?;
    let role = match role {
        Some(role) => role,
        None => prompt_role()?,
    };
    form::validate_registration(&name, &email, &password, &confirm_password)?;

    let spinner = create_spinner("Creating account".to_string());
    let result = app.session.register(&name, &email, &password, role).await;
    spinner.finish_and_clear();

    match result {
        Ok(user) => {
            println!(
                "{}",
                format!("Welcome, {}! Signed in as a {}.", user.name, user.role).green()
            );
            Ok(())
        }
        Err(e) => {
            debug!("registration failed: {}", e);
            anyhow::bail!("Registration failed. Please try again.")
        }
    }
}

pub async fn logout() -> Result<()> {
    let mut app = App::start().await?;

    let name = app.session.user().map(|u| u.name.clone());
    app.session.sign_out()?;

    match name {
        Some(name) => println!("Signed out {}.", name),
        None => println!("{}", "Not signed in.".dimmed()),
    }

    Ok(())
}

fn prompt_role() -> Result<Role> {
    let roles = [Role::Student, Role::Coach];
    let items = ["Student", "Coach"];
    let selection = dialoguer::Select::new()
        .with_prompt("  I am a")
        .items(&items)
        .default(0)
        .interact()?;
    Ok(roles[selection])
}
