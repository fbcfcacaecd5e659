//! Seed an admin account.
//!
//! Accounts are never created over HTTP; this binary is the only write path.
//!
//! ```text
//! DATABASE_URL=postgres://... create-admin <email> <password> [role]
//! ```

use folio_api::auth::password::{hash_password, validate_password_strength};
use folio_db::models::admin_user::CreateAdminUser;
use folio_db::repositories::AdminUserRepo;

/// Minimum accepted password length for seeded accounts.
const MIN_PASSWORD_LENGTH: usize = 12;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let mut args = std::env::args().skip(1);
    let (Some(email), Some(password)) = (args.next(), args.next()) else {
        eprintln!("Usage: create-admin <email> <password> [role]");
        std::process::exit(2);
    };
    let role = args.next().unwrap_or_else(|| "admin".to_string());

    if let Err(msg) = validate_password_strength(&password, MIN_PASSWORD_LENGTH) {
        eprintln!("Refusing to create account: {msg}");
        std::process::exit(2);
    }

    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let pool = folio_db::create_pool(&database_url)
        .await
        .expect("Failed to connect to database");
    folio_db::run_migrations(&pool)
        .await
        .expect("Failed to run database migrations");

    if AdminUserRepo::find_by_email(&pool, &email)
        .await
        .expect("Account lookup failed")
        .is_some()
    {
        eprintln!("An account with email {email} already exists");
        std::process::exit(1);
    }

    let password_hash = hash_password(&password).expect("Password hashing failed");

    let account = AdminUserRepo::create(
        &pool,
        &CreateAdminUser {
            email,
            password_hash,
            role,
        },
    )
    .await
    .expect("Account creation failed");

    println!("Created admin account {} ({})", account.email, account.id);
}
