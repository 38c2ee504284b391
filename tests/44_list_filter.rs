mod common;

use anyhow::Result;
use reqwest::StatusCode;
use serde_json::json;

#[tokio::test]
async fn pagination_clamps_and_counts() -> Result<()> {
    if !common::database_configured() {
        eprintln!("skipping: DATABASE_URL not set");
        return Ok(());
    }
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();
    let (token, _) = common::register_and_login(server, &client).await?;

    for i in 0..25 {
        common::create_todo(server, &client, &token, json!({ "title": format!("item {:02}", i) }))
            .await?;
    }

    // Default page size over 25 todos: 10 items, 3 pages
    let res = client
        .get(format!("{}/todos?page=1&limit=10", server.base_url))
        .bearer_auth(&token)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["todos"].as_array().unwrap().len(), 10);
    assert_eq!(body["pagination"]["total"], 25);
    assert_eq!(body["pagination"]["total_pages"], 3);

    // page=0 behaves as page=1
    let res = client
        .get(format!("{}/todos?page=0&limit=10", server.base_url))
        .bearer_auth(&token)
        .send()
        .await?;
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["pagination"]["page"], 1);
    assert_eq!(body["todos"].as_array().unwrap().len(), 10);

    // Out-of-range limit falls back to the default of 10
    let res = client
        .get(format!("{}/todos?limit=500", server.base_url))
        .bearer_auth(&token)
        .send()
        .await?;
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["pagination"]["limit"], 10);
    assert_eq!(body["todos"].as_array().unwrap().len(), 10);

    // Newest first: the last page holds the first-created items
    let res = client
        .get(format!("{}/todos?page=3&limit=10", server.base_url))
        .bearer_auth(&token)
        .send()
        .await?;
    let body = res.json::<serde_json::Value>().await?;
    let last_page = body["todos"].as_array().unwrap();
    assert_eq!(last_page.len(), 5);
    assert_eq!(last_page.last().unwrap()["title"], "item 00");
    Ok(())
}

#[tokio::test]
async fn filters_combine_with_and() -> Result<()> {
    if !common::database_configured() {
        eprintln!("skipping: DATABASE_URL not set");
        return Ok(());
    }
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();
    let (token, _) = common::register_and_login(server, &client).await?;

    common::create_todo(
        server,
        &client,
        &token,
        json!({ "title": "send invoice", "priority": "high", "category": "work" }),
    )
    .await?;
    common::create_todo(
        server,
        &client,
        &token,
        json!({ "title": "send postcard", "priority": "low", "category": "home" }),
    )
    .await?;
    common::create_todo(
        server,
        &client,
        &token,
        json!({ "title": "file taxes", "priority": "high", "category": "work" }),
    )
    .await?;

    let res = client
        .get(format!(
            "{}/todos?priority=high&category=work&search=invoice",
            server.base_url
        ))
        .bearer_auth(&token)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    let body = res.json::<serde_json::Value>().await?;
    let todos = body["todos"].as_array().unwrap();
    assert_eq!(todos.len(), 1);
    assert_eq!(todos[0]["title"], "send invoice");
    assert_eq!(body["pagination"]["total"], 1);

    // Unknown filter values are client errors, not empty result sets
    let res = client
        .get(format!("{}/todos?priority=urgent", server.base_url))
        .bearer_auth(&token)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let res = client
        .get(format!("{}/todos?completed=yes", server.base_url))
        .bearer_auth(&token)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn stats_reports_five_counts() -> Result<()> {
    if !common::database_configured() {
        eprintln!("skipping: DATABASE_URL not set");
        return Ok(());
    }
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();
    let (token, _) = common::register_and_login(server, &client).await?;

    // One completed, one high-priority pending, one overdue pending
    let done = common::create_todo(server, &client, &token, json!({ "title": "already done" }))
        .await?;
    client
        .patch(format!(
            "{}/todos/{}/toggle",
            server.base_url,
            done["id"].as_str().unwrap()
        ))
        .bearer_auth(&token)
        .send()
        .await?;
    common::create_todo(
        server,
        &client,
        &token,
        json!({ "title": "urgent thing", "priority": "high" }),
    )
    .await?;
    common::create_todo(
        server,
        &client,
        &token,
        json!({ "title": "missed deadline", "due_date": "2020-01-01T00:00:00Z" }),
    )
    .await?;

    let res = client
        .get(format!("{}/todos/stats", server.base_url))
        .bearer_auth(&token)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    let stats = res.json::<serde_json::Value>().await?;

    assert_eq!(stats["total"], 3);
    assert_eq!(stats["completed"], 1);
    assert_eq!(stats["pending"], 2);
    assert_eq!(stats["high_priority"], 1);
    assert_eq!(stats["overdue"], 1);
    Ok(())
}

#[tokio::test]
async fn bulk_operations_respect_ownership() -> Result<()> {
    if !common::database_configured() {
        eprintln!("skipping: DATABASE_URL not set");
        return Ok(());
    }
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let (owner_token, _) = common::register_and_login(server, &client).await?;
    let (other_token, _) = common::register_and_login(server, &client).await?;

    let owned =
        common::create_todo(server, &client, &owner_token, json!({ "title": "owned item" }))
            .await?;
    let foreign =
        common::create_todo(server, &client, &other_token, json!({ "title": "foreign item" }))
            .await?;

    // Foreign ids are skipped silently; only the owned row counts
    let res = client
        .post(format!("{}/todos/bulk-delete", server.base_url))
        .bearer_auth(&owner_token)
        .json(&json!({ "ids": [owned["id"], foreign["id"]] }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["deleted"], 1);

    // The foreign todo is untouched
    let res = client
        .get(format!(
            "{}/todos/{}",
            server.base_url,
            foreign["id"].as_str().unwrap()
        ))
        .bearer_auth(&other_token)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);

    // Empty id set is a validation error
    let res = client
        .post(format!("{}/todos/bulk-delete", server.base_url))
        .bearer_auth(&owner_token)
        .json(&json!({ "ids": [] }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn bulk_complete_sets_flag_uniformly() -> Result<()> {
    if !common::database_configured() {
        eprintln!("skipping: DATABASE_URL not set");
        return Ok(());
    }
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();
    let (token, _) = common::register_and_login(server, &client).await?;

    let a = common::create_todo(server, &client, &token, json!({ "title": "first task" })).await?;
    let b = common::create_todo(server, &client, &token, json!({ "title": "second task" })).await?;

    let res = client
        .post(format!("{}/todos/bulk-complete", server.base_url))
        .bearer_auth(&token)
        .json(&json!({ "ids": [a["id"], b["id"]], "completed": true }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["updated"], 2);

    let res = client
        .get(format!("{}/todos?completed=true", server.base_url))
        .bearer_auth(&token)
        .send()
        .await?;
    let listing = res.json::<serde_json::Value>().await?;
    assert_eq!(listing["pagination"]["total"], 2);
    Ok(())
}

#[tokio::test]
async fn categories_are_distinct_and_non_empty() -> Result<()> {
    if !common::database_configured() {
        eprintln!("skipping: DATABASE_URL not set");
        return Ok(());
    }
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();
    let (token, _) = common::register_and_login(server, &client).await?;

    for body in [
        json!({ "title": "task one", "category": "work" }),
        json!({ "title": "task two", "category": "work" }),
        json!({ "title": "task three", "category": "home" }),
        json!({ "title": "task four" }),
        json!({ "title": "task five", "category": "" }),
    ] {
        common::create_todo(server, &client, &token, body).await?;
    }

    let res = client
        .get(format!("{}/todos/categories", server.base_url))
        .bearer_auth(&token)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    let body = res.json::<serde_json::Value>().await?;

    let mut categories: Vec<String> = body["categories"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_str().unwrap().to_string())
        .collect();
    categories.sort();
    assert_eq!(categories, vec!["home".to_string(), "work".to_string()]);
    Ok(())
}
