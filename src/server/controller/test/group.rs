use super::*;

/// Tests group creation by a user without the Dungeon Master role.
///
/// Expected: 403 naming the required role
#[tokio::test]
async fn player_cannot_create_group() {
    let server = TestServer::start().await;
    let player = factory::helpers::create_user_with_role(server.db(), "Player")
        .await
        .unwrap();
    let token = server.token_for(player.id).await;

    let response = server
        .client
        .post(server.url("/api/groups"))
        .bearer_auth(token)
        .json(&json!({ "name": "Fellowship" }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let body: Value = response.json().await.unwrap();
    assert!(body["message"].as_str().unwrap().contains("Dungeon Master"));
}

/// Tests group creation by a Dungeon Master.
///
/// Expected: 201 with the group name
#[tokio::test]
async fn dungeon_master_creates_group() {
    let server = TestServer::start().await;
    let dm = factory::helpers::create_user_with_role(server.db(), "Dungeon Master")
        .await
        .unwrap();
    let token = server.token_for(dm.id).await;

    let response = server
        .client
        .post(server.url("/api/groups"))
        .bearer_auth(token)
        .json(&json!({ "name": "Fellowship" }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["name"], "Fellowship");
}

/// Tests recording a ledger entry for a missing group.
///
/// Verifies that the group lookup runs before the role check.
///
/// Expected: 404 for a player, 403 for the same player on an existing group
#[tokio::test]
async fn ledger_entry_checks_group_before_role() {
    let server = TestServer::start().await;
    let player = factory::helpers::create_user_with_role(server.db(), "Player")
        .await
        .unwrap();
    let group = factory::create_group(server.db()).await.unwrap();
    let token = server.token_for(player.id).await;
    let entry = json!({ "title": "Loot", "amount": 10 });

    let missing = server
        .client
        .post(server.url("/api/groups/9999/bank"))
        .bearer_auth(&token)
        .json(&entry)
        .send()
        .await
        .unwrap();
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);

    let existing = server
        .client
        .post(server.url(&format!("/api/groups/{}/bank", group.id)))
        .bearer_auth(&token)
        .json(&entry)
        .send()
        .await
        .unwrap();
    assert_eq!(existing.status(), StatusCode::FORBIDDEN);
}
