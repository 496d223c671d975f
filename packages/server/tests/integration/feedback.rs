use sea_orm::{EntityTrait, PaginatorTrait};
use serde_json::json;

use kuulemma::entity::feedback;

use crate::common::{TestApp, routes};

async fn feedback_count(app: &TestApp) -> u64 {
    feedback::Entity::find()
        .count(&app.db)
        .await
        .expect("count feedback rows")
}

mod feedback_creation {
    use super::*;

    #[tokio::test]
    async fn valid_feedback_is_persisted() {
        let app = TestApp::spawn().await;

        let res = app
            .post_json(routes::FEEDBACK, &json!({"content": "This is feedback!"}))
            .await;

        assert_eq!(res.status, 201);
        assert_eq!(feedback_count(&app).await, 1);

        let row = feedback::Entity::find()
            .one(&app.db)
            .await
            .expect("query feedback")
            .expect("one feedback row");
        assert_eq!(row.content, "This is feedback!");
    }

    #[tokio::test]
    async fn response_echoes_the_created_feedback() {
        let app = TestApp::spawn().await;

        let res = app
            .post_json(routes::FEEDBACK, &json!({"content": "This is feedback!"}))
            .await;

        assert_eq!(res.status, 201);
        assert_eq!(res.body["content"], "This is feedback!");
        assert!(res.body["id"].is_number());
        assert!(res.body["comment_id"].is_null());
        assert!(res.body["user_id"].is_null());
    }

    #[tokio::test]
    async fn comment_and_user_references_are_stored() {
        let app = TestApp::spawn().await;

        let res = app
            .post_json(
                routes::FEEDBACK,
                &json!({"content": "Kommentti oli hyvä", "comment_id": 7, "user_id": 3}),
            )
            .await;

        assert_eq!(res.status, 201);
        assert_eq!(res.body["comment_id"], 7);
        assert_eq!(res.body["user_id"], 3);
    }
}

mod feedback_validation {
    use super::*;

    #[tokio::test]
    async fn missing_body_is_rejected_without_persisting() {
        let app = TestApp::spawn().await;

        let res = app.post_empty(routes::FEEDBACK).await;

        assert_eq!(res.status, 400);
        assert_eq!(feedback_count(&app).await, 0);
    }

    #[tokio::test]
    async fn missing_content_is_rejected() {
        let app = TestApp::spawn().await;

        let res = app
            .post_json(routes::FEEDBACK, &json!({"other_data": "info"}))
            .await;

        assert_eq!(res.status, 400);
        assert_eq!(res.body["code"], "VALIDATION_ERROR");
        assert_eq!(feedback_count(&app).await, 0);
    }

    #[tokio::test]
    async fn empty_content_is_rejected() {
        let app = TestApp::spawn().await;

        let res = app.post_json(routes::FEEDBACK, &json!({"content": ""})).await;

        assert_eq!(res.status, 400);
        assert_eq!(feedback_count(&app).await, 0);
    }

    #[tokio::test]
    async fn whitespace_content_is_rejected() {
        let app = TestApp::spawn().await;

        let res = app
            .post_json(routes::FEEDBACK, &json!({"content": "   "}))
            .await;

        assert_eq!(res.status, 400);
        assert_eq!(feedback_count(&app).await, 0);
    }
}

mod honeypot {
    use super::*;

    #[tokio::test]
    async fn filled_honeypot_is_rejected_without_persisting() {
        let app = TestApp::spawn().await;

        let res = app
            .post_json(routes::FEEDBACK, &json!({"content": "x", "hp": "spam"}))
            .await;

        assert_eq!(res.status, 400);
        assert_eq!(feedback_count(&app).await, 0);
    }

    #[tokio::test]
    async fn empty_honeypot_is_accepted() {
        let app = TestApp::spawn().await;

        let res = app
            .post_json(
                routes::FEEDBACK,
                &json!({"content": "This is feedback!", "hp": ""}),
            )
            .await;

        assert_eq!(res.status, 201);
        assert_eq!(feedback_count(&app).await, 1);
    }

    #[tokio::test]
    async fn rejection_is_indistinguishable_from_a_validation_failure() {
        let app = TestApp::spawn().await;

        let spam = app
            .post_json(routes::FEEDBACK, &json!({"content": "x", "hp": "spam"}))
            .await;
        let missing_content = app.post_json(routes::FEEDBACK, &json!({})).await;
        let missing_body = app.post_empty(routes::FEEDBACK).await;

        assert_eq!(spam.status, missing_content.status);
        assert_eq!(spam.status, missing_body.status);
        assert_eq!(spam.body["code"], missing_content.body["code"]);
        assert_eq!(spam.body["code"], missing_body.body["code"]);
        assert_eq!(spam.body["message"], missing_content.body["message"]);
        assert_eq!(spam.body["message"], missing_body.body["message"]);
    }
}
