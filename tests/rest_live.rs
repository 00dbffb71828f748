/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
mod helpers;

// These talk to api.flickr.com and need FLICKR_API_KEY, so they are ignored by default
#[cfg(test)]
mod test {
    use crate::helpers;
    use dotenvy::dotenv;
    use fleakr::rest::{Client, User};

    #[ignore]
    #[tokio::test]
    async fn user_from_username() {
        dotenv().ok();
        let creds = helpers::get_live_creds().unwrap();
        let client = Client::new(creds);
        let mut user = User::find_by_username(client, "Stewart").await.unwrap();
        println!("User info: {}", user);
        assert!(user.id().is_some());
        println!("Icon: {}", user.icon_url().await.unwrap());
    }

    #[ignore]
    #[tokio::test]
    async fn user_sets_and_photos() {
        dotenv().ok();
        let creds = helpers::get_live_creds().unwrap();
        let client = Client::new(creds);
        let user = User::find_by_username(client, "Stewart").await.unwrap();

        for set in user.sets().await.unwrap() {
            println!("Set: {:?} ({} photos)", set.title(), set.count());
        }
        let photos = user.photos().await.unwrap();
        assert!(!photos.is_empty());
    }
}
