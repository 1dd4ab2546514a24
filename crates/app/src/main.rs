//! Interactive navigation console: wires the session store, navigation shell
//! and router together the way the UI host would.

use anyhow::Context;
use tokio::io::{AsyncBufReadExt, BufReader};

use eticket_app::{default_routes, Resolution, Router};
use eticket_auth::{Principal, Role};
use eticket_core::{AppConfig, UserId};
use eticket_nav::NavigationShell;
use eticket_session::{FileStorage, SessionStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    eticket_observability::init();

    let config = AppConfig::from_env();
    let storage = FileStorage::new(&config.session_dir);
    let mut shell = NavigationShell::new(SessionStore::new(storage), config);

    let session = shell.resolve_session().await;
    match &session.principal {
        Some(principal) => {
            tracing::info!(name = %principal.display_name, role = %principal.role, "session restored")
        }
        None => tracing::info!("no persisted session, browsing anonymously"),
    }

    let router = default_routes();
    router.validate().context("route table misconfigured")?;

    println!("commands: <path> | links | whoami | login <role> <name> | logout | quit");
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        match line.split_whitespace().collect::<Vec<_>>().as_slice() {
            [] => {}
            ["quit"] | ["exit"] => break,
            ["links"] => {
                for nav_link in shell.links() {
                    println!("{:<20} {}", nav_link.label, nav_link.path);
                }
            }
            ["whoami"] => match &shell.session().principal {
                Some(p) => {
                    println!("{} ({})", p.display_name, p.role);
                    if let Some(src) = shell.avatar_src() {
                        println!("avatar: {src}");
                    } else {
                        println!("initials: {}", shell.initials());
                    }
                }
                None => println!("anonymous"),
            },
            ["logout"] => {
                let target = shell.sign_out();
                println!("signed out, navigating to {target}");
                navigate(&router, &shell, target);
            }
            ["login", role, name @ ..] if !name.is_empty() => {
                match role.parse::<Role>() {
                    Ok(role) => {
                        let principal = Principal::new(UserId::new(), name.join(" "), role);
                        shell
                            .store_mut()
                            .establish(dev_token(), principal)
                            .context("failed to persist session")?;
                        println!("signed in, navigating to {}", shell.home_path());
                        navigate(&router, &shell, shell.home_path());
                    }
                    Err(err) => println!("{err}"),
                }
            }
            [path] if path.starts_with('/') => navigate(&router, &shell, path),
            _ => println!("unrecognized command: {line}"),
        }
    }

    Ok(())
}

fn navigate<S: eticket_session::SessionStorage>(
    router: &Router,
    shell: &NavigationShell<S>,
    path: &str,
) {
    match router.resolve(path, shell.session()) {
        Resolution::Render(matched) => {
            if matched.params.is_empty() {
                println!("{path} -> {}", matched.screen);
            } else {
                println!("{path} -> {} {:?}", matched.screen, matched.params);
            }
        }
        Resolution::Loading => println!("{path} -> (session still loading)"),
        Resolution::RedirectToLogin => println!("{path} -> redirect {}", eticket_core::config::LOGIN_PATH),
        Resolution::RedirectToHome => println!("{path} -> redirect {}", eticket_core::config::HOME_PATH),
        Resolution::NotFound => println!("{path} -> not found"),
    }
}

/// Dev stand-in for the token the login endpoint would issue.
fn dev_token() -> String {
    format!("dev-{}", UserId::new())
}
