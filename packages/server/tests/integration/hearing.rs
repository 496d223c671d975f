use sea_orm::{ActiveModelTrait, EntityTrait, Set};
use serde_json::json;

use kuulemma::entity::{alternative, image};

use crate::common::{FRONTPAGE_URL, TestApp, routes};

/// Insert an image row directly into the DB, optionally attached to an
/// alternative, and return its ID.
async fn insert_image(app: &TestApp, alternative_id: Option<i32>, caption: &str) -> i32 {
    let img = image::ActiveModel {
        filename: Set("kartta.png".into()),
        caption: Set(caption.into()),
        alternative_id: Set(alternative_id),
        created_at: Set(chrono::Utc::now()),
        ..Default::default()
    };
    img.insert(&app.db).await.expect("insert image").id
}

/// Point an alternative's main image at the given image row.
async fn set_main_image(app: &TestApp, alternative_id: i32, image_id: i32) {
    let alt = alternative::Entity::find_by_id(alternative_id)
        .one(&app.db)
        .await
        .expect("query alternative")
        .expect("alternative exists");
    let mut active: alternative::ActiveModel = alt.into();
    active.main_image_id = Set(Some(image_id));
    active.update(&app.db).await.expect("update alternative");
}

mod hearing_index {
    use super::*;

    #[tokio::test]
    async fn redirects_to_frontpage_when_no_hearing_exists() {
        let app = TestApp::spawn().await;

        let res = app.get(routes::KUULEMISET).await;

        assert_eq!(res.status, 302);
        assert_eq!(res.location.as_deref(), Some(FRONTPAGE_URL));
    }

    #[tokio::test]
    async fn redirects_to_the_first_hearing() {
        let app = TestApp::spawn().await;
        let id = app.create_hearing("pisararata").await;

        let res = app.get(routes::KUULEMISET).await;

        assert_eq!(res.status, 302);
        assert_eq!(
            res.location,
            Some(routes::kuulemiset_show(id, "pisararata"))
        );
    }
}

mod hearing_show {
    use super::*;

    #[tokio::test]
    async fn serves_the_hearing_under_its_canonical_url() {
        let app = TestApp::spawn().await;
        let id = app.create_hearing("pisararata").await;

        let res = app.get(&routes::kuulemiset_show(id, "pisararata")).await;

        assert_eq!(res.status, 200);
        assert_eq!(res.body["slug"], "pisararata");
        assert_eq!(res.body["title"], "Pisararata");
    }

    #[tokio::test]
    async fn stale_slug_redirects_to_the_canonical_url() {
        let app = TestApp::spawn().await;
        let id = app.create_hearing("correct-slug").await;

        let res = app.get(&routes::kuulemiset_show(id, "wrong-slug")).await;

        assert_eq!(res.status, 302);
        assert_eq!(
            res.location,
            Some(routes::kuulemiset_show(id, "correct-slug"))
        );
    }

    #[tokio::test]
    async fn unknown_hearing_is_a_404() {
        let app = TestApp::spawn().await;

        let res = app.get(&routes::kuulemiset_show(999, "nothing")).await;

        assert_eq!(res.status, 404);
        assert_eq!(res.body["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn malformed_path_segment_is_a_404() {
        let app = TestApp::spawn().await;
        app.create_hearing("pisararata").await;

        let res = app.get("/kuulemiset/pisararata").await;

        assert_eq!(res.status, 404);
    }
}

mod hearing_admin {
    use super::*;

    #[tokio::test]
    async fn create_defaults_missing_texts_to_empty_strings() {
        let app = TestApp::spawn().await;

        let res = app
            .post_json(routes::HEARINGS, &json!({"slug": "tyhja", "title": null}))
            .await;

        assert_eq!(res.status, 201);
        assert_eq!(res.body["title"], "");
        assert_eq!(res.body["lead"], "");
        assert_eq!(res.body["body"], "");
    }

    #[tokio::test]
    async fn duplicate_slug_is_a_conflict() {
        let app = TestApp::spawn().await;
        app.create_hearing("pisararata").await;

        let res = app
            .post_json(routes::HEARINGS, &json!({"slug": "pisararata"}))
            .await;

        assert_eq!(res.status, 409);
        assert_eq!(res.body["code"], "CONFLICT");
    }

    #[tokio::test]
    async fn invalid_slug_is_rejected() {
        let app = TestApp::spawn().await;

        let res = app
            .post_json(routes::HEARINGS, &json!({"slug": "Not A Slug"}))
            .await;

        assert_eq!(res.status, 400);
        assert_eq!(res.body["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn list_returns_created_hearings() {
        let app = TestApp::spawn().await;
        app.create_hearing("eka").await;
        app.create_hearing("toka").await;

        let res = app.get(routes::HEARINGS).await;

        assert_eq!(res.status, 200);
        assert_eq!(res.body.as_array().map(Vec::len), Some(2));
    }
}

mod commentable_sections {
    use super::*;

    #[tokio::test]
    async fn detail_contains_the_hearings_own_section() {
        let app = TestApp::spawn().await;
        let id = app.create_hearing("pisararata").await;

        let res = app.get(&routes::hearing(id)).await;

        assert_eq!(res.status, 200);
        let sections = res.body["commentable_sections_string"]
            .as_str()
            .expect("sections string");
        assert!(sections.contains(&format!("hearing-{id}")));
    }

    #[tokio::test]
    async fn detail_contains_every_alternatives_section() {
        let app = TestApp::spawn().await;
        let id = app.create_hearing("pisararata").await;
        let alt_a = app.create_alternative(id, "Vaihtoehto A").await;
        let alt_b = app.create_alternative(id, "Vaihtoehto B").await;

        let res = app.get(&routes::hearing(id)).await;

        let sections = res.body["commentable_sections_string"]
            .as_str()
            .expect("sections string");
        assert!(sections.contains(&format!("alternative-{alt_a}")));
        assert!(sections.contains(&format!("alternative-{alt_b}")));
    }

    #[tokio::test]
    async fn sections_contain_attached_and_main_images() {
        let app = TestApp::spawn().await;
        let id = app.create_hearing("pisararata").await;
        let alt = app.create_alternative(id, "Tunneli").await;

        let attached_a = insert_image(&app, Some(alt), "Kartta").await;
        let attached_b = insert_image(&app, Some(alt), "").await;
        let main = insert_image(&app, None, "Pääkuva").await;
        set_main_image(&app, alt, main).await;

        let res = app.get(&routes::hearing(id)).await;

        let sections = res.body["commentable_sections_string"]
            .as_str()
            .expect("sections string");
        assert!(sections.contains(&format!("image-{attached_a}")));
        assert!(sections.contains(&format!("image-{attached_b}")));
        assert!(sections.contains(&format!("image-{main}")));
    }

    #[tokio::test]
    async fn sections_string_is_stable_across_reads() {
        let app = TestApp::spawn().await;
        let id = app.create_hearing("pisararata").await;
        let alt = app.create_alternative(id, "Tunneli").await;
        let img = insert_image(&app, Some(alt), "Kartta").await;
        set_main_image(&app, alt, img).await;

        let first = app.get(&routes::hearing(id)).await;
        let second = app.get(&routes::hearing(id)).await;

        assert_eq!(
            first.body["commentable_sections_string"],
            second.body["commentable_sections_string"]
        );
    }

    #[tokio::test]
    async fn commentable_option_combines_id_and_name() {
        let app = TestApp::spawn().await;
        let id = app.create_hearing("pisararata").await;
        let alt = app.create_alternative(id, "Tunneli").await;

        let res = app.get(&routes::alternatives(id)).await;
        let first = &res.body[0];

        assert_eq!(first["commentable_id"], format!("alternative-{alt}"));
        assert_eq!(first["commentable_name"], "Vaihtoehto A");
        assert_eq!(
            first["commentable_option"],
            format!("alternative-{alt}:Vaihtoehto A")
        );
    }
}
