/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

extern crate fleakr;

use anyhow::Result;
use dotenvy::dotenv;
use fleakr::rest::{Client, Creds, User};

// Prints a user's profile and what they have shared.
async fn print_user(mut user: User) -> Result<()> {
    println!("{}", user);

    // The first of these triggers people.getInfo, the rest reuse its response
    println!("  name:     {}", user.name().await?.unwrap_or("-"));
    println!("  photos:   {}", user.photos_count().await?.unwrap_or("0"));
    println!("  profile:  {}", user.profile_url().await?.unwrap_or("-"));
    println!("  pro:      {}", user.is_pro().await?);
    println!("  icon:     {}", user.icon_url().await?);

    for set in user.sets().await? {
        println!(
            "  set {}: {} ({} photos)",
            set.id().unwrap_or_default(),
            set.title().unwrap_or_default(),
            set.count()
        );
    }

    for group in user.groups().await? {
        println!("  group: {}", group.name().unwrap_or_default());
    }

    for contact in user.contacts().await? {
        println!("  contact: {}", contact);
    }
    Ok(())
}

// main
#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    env_logger::init();

    // Usage: user_info <username or email>
    let who = std::env::args()
        .nth(1)
        .ok_or_else(|| anyhow::anyhow!("usage: user_info <username|email>"))?;

    // The API key is the only thing needed for reading public data.
    let client = Client::new(Creds::from_env()?);

    let user = if who.contains('@') {
        User::find_by_email(client, &who).await?
    } else {
        User::find_by_username(client, &who).await?
    };
    print_user(user).await
}
