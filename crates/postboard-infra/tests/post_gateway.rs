//! Post gateway behaviour over the in-memory repository.

use std::sync::Arc;

use postboard_core::domain::NewPost;
use postboard_core::{PostService, ServiceConfig};
use postboard_infra::InMemoryPostRepository;

fn gateway() -> (PostService, Arc<InMemoryPostRepository>) {
    let repo = Arc::new(InMemoryPostRepository::new());
    let service = PostService::new(repo.clone(), ServiceConfig::default());
    (service, repo)
}

#[tokio::test]
async fn create_echoes_input_and_is_retrievable() {
    let (svc, _) = gateway();

    let response = svc.create_post(NewPost::new("Hello", "World")).await;

    assert_eq!(response.code(), 200);
    assert!(response.success());
    assert_eq!(response.message(), "Post created successfully");
    let created = response.post().cloned().unwrap();
    assert_eq!(created.title, "Hello");
    assert_eq!(created.text, "World");

    let fetched = svc.post(created.id).await.unwrap();
    assert_eq!(fetched, Some(created));
}

#[tokio::test]
async fn missing_id_is_not_found_and_store_untouched() {
    let (svc, repo) = gateway();
    svc.create_post(NewPost::new("keep", "me")).await;

    let update = svc.update_post(77, "x".into(), "y".into()).await;
    let delete = svc.delete_post(77).await;

    for response in [&update, &delete] {
        assert_eq!(response.code(), 400);
        assert!(!response.success());
        assert_eq!(response.message(), "Post not found");
        assert!(response.post().is_none());
    }

    assert_eq!(repo.len().await, 1);
    let survivor = svc.post(1).await.unwrap().unwrap();
    assert_eq!(survivor.title, "keep");
}

#[tokio::test]
async fn update_overwrites_fields() {
    let (svc, _) = gateway();
    let id = svc
        .create_post(NewPost::new("draft", "first"))
        .await
        .into_post()
        .unwrap()
        .id;

    let response = svc.update_post(id, "final".into(), "second".into()).await;

    assert_eq!(response.code(), 200);
    assert_eq!(response.message(), "Post updated successfully");
    let updated = response.post().unwrap();
    assert_eq!(updated.id, id);
    assert_eq!(updated.title, "final");
    assert_eq!(updated.text, "second");

    let fetched = svc.post(id).await.unwrap().unwrap();
    assert_eq!(fetched.title, "final");
    assert_eq!(fetched.text, "second");
    assert!(fetched.updated_at >= fetched.created_at);
}

#[tokio::test]
async fn delete_removes_post_and_second_delete_is_not_found() {
    let (svc, _) = gateway();
    let id = svc
        .create_post(NewPost::new("short", "lived"))
        .await
        .into_post()
        .unwrap()
        .id;

    let first = svc.delete_post(id).await;
    assert_eq!(first.code(), 200);
    assert!(first.success());
    assert_eq!(first.message(), "Post deleted successfully");
    assert!(first.post().is_none());

    assert!(svc.post(id).await.unwrap().is_none());

    let second = svc.delete_post(id).await;
    assert_eq!(second.code(), 400);
    assert_eq!(second.message(), "Post not found");
}

#[tokio::test]
async fn posts_on_empty_store_is_empty() {
    let (svc, _) = gateway();

    let posts = svc.posts().await.unwrap();

    assert!(posts.is_empty());
}

#[tokio::test]
async fn hello_world_scenario() {
    let (svc, _) = gateway();

    let created = svc.create_post(NewPost::new("Hello", "World")).await;
    assert_eq!(created.code(), 200);
    assert!(created.success());
    let post = created.into_post().unwrap();
    assert_eq!(post.id, 1);

    assert_eq!(svc.post(1).await.unwrap(), Some(post));

    let deleted = svc.delete_post(1).await;
    assert_eq!(deleted.code(), 200);
    assert!(deleted.success());

    assert_eq!(svc.post(1).await.unwrap(), None);
}

#[tokio::test]
async fn concurrent_updates_last_write_wins() {
    let (svc, _) = gateway();
    svc.create_post(NewPost::new("t", "x")).await;

    let (a, b) = tokio::join!(
        svc.update_post(1, "a".into(), "a".into()),
        svc.update_post(1, "b".into(), "b".into()),
    );
    assert_eq!(a.code(), 200);
    assert_eq!(b.code(), 200);

    let stored = svc.post(1).await.unwrap().unwrap();
    assert!(stored.title == "a" || stored.title == "b");
    assert_eq!(stored.title, stored.text);
}
