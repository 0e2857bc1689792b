use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::profile::{UserProfile, UserRole};
use crate::store::{self, keys};
use crate::ui::messages::success;
use crate::utils::phone;

/// Show or update the rider profile.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Profile {
        role,
        name,
        student_phone,
        parent_phone,
        applied,
    } = cmd
    else {
        return Ok(());
    };

    let mut store = open_store(cfg)?;
    let existing: Option<UserProfile> = store::get_json(&store, &keys::profile())?;

    let no_changes = role.is_none()
        && name.is_none()
        && student_phone.is_none()
        && parent_phone.is_none()
        && !applied;

    if no_changes {
        match existing {
            Some(p) => {
                println!("role:          {}", p.role.code());
                println!("name:          {}", p.name);
                println!(
                    "student phone: {}",
                    phone::format_phone(&p.student_phone)
                );
                println!("parent phone:  {}", phone::format_phone(&p.parent_phone));
                println!("applied:       {}", if p.is_applied { "yes" } else { "no" });
            }
            None => println!("no profile stored; set one with --role and --name"),
        }
        return Ok(());
    }

    let mut profile = match existing {
        Some(p) => p,
        None => {
            let r = role
                .as_deref()
                .and_then(UserRole::from_code)
                .or_else(|| UserRole::from_code(&cfg.default_role))
                .ok_or_else(|| AppError::InvalidRole(cfg.default_role.clone()))?;
            UserProfile::new(r, name.as_deref().unwrap_or(""))
        }
    };

    if let Some(r) = role {
        profile.role =
            UserRole::from_code(r).ok_or_else(|| AppError::InvalidRole(r.to_string()))?;
    }
    if let Some(n) = name {
        profile.name = n.clone();
    }
    if let Some(p) = student_phone {
        profile.student_phone = phone::normalize(p)?;
    }
    if let Some(p) = parent_phone {
        profile.parent_phone = phone::normalize(p)?;
    }
    if *applied {
        profile.is_applied = true;
    }

    store::set_json(&mut store, &keys::profile(), &profile)?;
    success("profile saved");

    Ok(())
}
