//! CLI command execution

use color_eyre::Result;
use panel::routes;
use panel::{AccountType, FullUser, NewAccount, Permissions, UpdateAccount};

use crate::context::Context;
use crate::nav::Navigation;
use crate::opt::Command;

pub async fn run(context: &Context, command: Command) -> Result<()> {
    match command {
        Command::Login { username, password } => {
            let user = context
                .session()
                .login_with_credentials(&username, &password)
                .await?;
            println!("Logged in as {} ({})", user.username, user.name);
        }

        Command::Logout => {
            context.session().logout().await;
            println!("Logged out");
        }

        Command::Whoami => match context.session().update_user().await {
            Some(user) => {
                print_profile(&user);
                if let Some(session) = context.session().session().await {
                    println!("  session expires: {}", session.expires);
                }
            }
            None => println!("Not logged in"),
        },

        Command::Groups { refresh } => {
            let groups = context.admin().groups(refresh).await;
            if groups.is_empty() {
                println!("No groups loaded");
            }
            for group in groups {
                println!(
                    "{:>4}  {:<24} accounts: {:<5} system: {}",
                    group.id,
                    group.group_name,
                    group.permissions.modify_accounts,
                    group.permissions.manage_system,
                );
            }
        }

        Command::Domains { refresh } => {
            let domains = context.admin().domains(refresh).await;
            if domains.is_empty() {
                println!("No domains loaded");
            }
            for domain in domains {
                println!("{:>4}  {}", domain.id, domain.domain);
            }
        }

        Command::Accounts { refresh } => {
            let accounts = context.admin().accounts(refresh).await;
            if accounts.is_empty() {
                println!("No accounts loaded");
            }
            for account in accounts {
                println!(
                    "{:>4}  {:<20} {:<32} {}",
                    account.id,
                    account.username,
                    account.primary_email.as_deref().unwrap_or("-"),
                    account.description,
                );
            }
        }

        Command::Account { id, emails } => {
            let account = context.admin().account(id, emails).await?;
            print_account(&account);
        }

        Command::CreateAccount {
            name,
            username,
            description,
            password,
            quota,
            group,
            group_account,
            backup_email,
            require_password_change,
            send_password_reset,
        } => {
            let account = NewAccount {
                name,
                username: username.clone(),
                description,
                password,
                quota,
                require_password_change,
                account_type: if group_account {
                    AccountType::Group
                } else {
                    AccountType::Individual
                },
                backup_email,
                group,
                send_a_password_reset_email: send_password_reset,
            };
            context.admin().create_account(&account).await?;
            println!("Account {username} created");
        }

        Command::UpdateAccount {
            id,
            name,
            description,
            quota,
            backup_email,
            clear_backup_email,
        } => {
            let update = UpdateAccount {
                name,
                description,
                quota,
                account_type: None,
                backup_email: if clear_backup_email {
                    Some(None)
                } else {
                    backup_email.map(Some)
                },
            };
            context.admin().update_account(id, &update).await?;
            println!("Account {id} updated");
        }

        Command::SetActive { id, active } => {
            context.admin().set_account_active(id, active).await?;
            println!(
                "Account {id} {}",
                if active { "activated" } else { "deactivated" }
            );
        }

        Command::ChangePassword {
            old_password,
            new_password,
        } => {
            context
                .session()
                .change_password(&old_password, &new_password)
                .await?;
            println!("Password changed");
        }

        Command::Nav { path } => match context.nav().resolve(&path).await {
            Navigation::Commit(route) => println!("{} -> {}", path, route.name),
            Navigation::RedirectToLogin(route) => {
                println!(
                    "{} requires login, redirected to {}",
                    route.name,
                    routes::LOGIN.pattern
                );
            }
            Navigation::Denied(route) => println!("{} denied, missing capability", route.name),
            Navigation::NotFound => println!("No route matches {path}"),
        },
    }

    Ok(())
}

fn print_profile(user: &panel::PanelUser) {
    println!("{} ({})", user.username, user.name);
    if let Some(email) = &user.primary_email {
        println!("  email:  {email}");
    }
    println!("  group:  {}", user.group_name);
    println!("  manage accounts: {}", user.can_manage_users());
    println!("  manage system:   {}", user.can_manage_system());
}

fn print_account(account: &FullUser) {
    println!("{} ({})", account.username, account.name);
    println!("  id:          {}", account.id);
    println!("  description: {}", account.description);
    println!("  type:        {:?}", account.account_type);
    println!("  active:      {}", account.active);
    println!("  quota:       {}", account.quota);
    println!("  group:       {}", account.group_name);
    if let Some(backup) = &account.backup_email {
        println!("  backup:      {backup}");
    }
    for email in account.emails.iter() {
        println!("  {:?}: {}", email.email_type, email.email_address);
    }
}
