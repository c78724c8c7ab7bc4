//! Dog API integration tests
//!
//! Tests for /dogs/ and /dogs/{id}, including breed linkage and cascade deletes

use actix_web::{http::StatusCode, test};
use serde_json::json;

use crate::common::{
    buddy, create_breed, create_dog, delete, get, init_app, labrador, post_json, put_json, send,
    test_state,
};

#[actix_web::test]
async fn test_create_dog_nests_breed() {
    let app = init_app(test_state().await, "").await;
    let breed_id = create_breed(&app, labrador()).await;

    let (status, dog) = send(&app, post_json("/dogs/", buddy(breed_id))).await;
    assert_eq!(status, StatusCode::CREATED);
    let dog = dog.unwrap();
    assert_eq!(
        dog,
        json!({
            "id": dog["id"],
            "name": "Buddy",
            "age": 3,
            "gender": "Male",
            "color": "Black",
            "favorite_food": "Bones",
            "favorite_toy": "Ball",
            "breed": {
                "id": breed_id,
                "name": "Labrador",
                "size": "L",
                "friendliness": 5,
                "trainability": 5,
                "shedding_amount": 3,
                "exercise_needs": 4,
            },
            "breed_id": breed_id,
        })
    );

    let (status, fetched) = send(&app, get(&format!("/dogs/{}", dog["id"]))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, Some(dog));
}

#[actix_web::test]
async fn test_create_dog_with_missing_breed() {
    let app = init_app(test_state().await, "").await;

    let (status, errors) = send(&app, post_json("/dogs/", buddy(42))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        errors,
        Some(json!({"breed_id": ["Invalid pk \"42\" - object does not exist."]}))
    );

    let (_, list) = send(&app, get("/dogs/")).await;
    assert_eq!(list, Some(json!([])));
}

#[actix_web::test]
async fn test_create_dog_breed_id_type_errors() {
    let app = init_app(test_state().await, "").await;

    let mut body = buddy(1);
    body["breed_id"] = json!("abc");
    let (status, errors) = send(&app, post_json("/dogs/", body)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        errors,
        Some(json!({"breed_id": ["Incorrect type. Expected pk value, received str."]}))
    );

    let mut body = buddy(1);
    body.as_object_mut().unwrap().remove("breed_id");
    let (status, errors) = send(&app, post_json("/dogs/", body)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        errors,
        Some(json!({"breed_id": ["This field is required."]}))
    );
}

#[actix_web::test]
async fn test_create_dog_ignores_nested_breed_and_id() {
    let app = init_app(test_state().await, "").await;
    let labrador_id = create_breed(&app, labrador()).await;

    let mut body = buddy(labrador_id);
    body["id"] = json!(500);
    body["breed"] = json!({"id": 9, "name": "Wolf"});
    let (status, dog) = send(&app, post_json("/dogs/", body)).await;
    assert_eq!(status, StatusCode::CREATED);
    let dog = dog.unwrap();
    assert_eq!(dog["id"], 1);
    assert_eq!(dog["breed"]["name"], "Labrador");
    assert_eq!(dog["breed_id"], labrador_id);
}

#[actix_web::test]
async fn test_create_dog_coerces_numeric_strings() {
    let app = init_app(test_state().await, "").await;
    let breed_id = create_breed(&app, labrador()).await;

    let mut body = buddy(breed_id);
    body["age"] = json!(" 7 ");
    body["breed_id"] = json!(breed_id.to_string());
    body["color"] = json!(5);
    let (status, dog) = send(&app, post_json("/dogs/", body)).await;
    assert_eq!(status, StatusCode::CREATED);
    let dog = dog.unwrap();
    assert_eq!(dog["age"], 7);
    assert_eq!(dog["color"], "5");
    assert_eq!(dog["breed_id"], breed_id);
}

#[actix_web::test]
async fn test_create_dog_field_errors() {
    let app = init_app(test_state().await, "").await;
    let breed_id = create_breed(&app, labrador()).await;

    let mut body = buddy(breed_id);
    body["age"] = json!(-1);
    body["gender"] = json!("Hermaphrodite");
    body["favorite_toy"] = json!(null);
    let (status, errors) = send(&app, post_json("/dogs/", body)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        errors,
        Some(json!({
            "age": ["Ensure this value is greater than or equal to 0."],
            "gender": ["Ensure this field has no more than 10 characters."],
            "favorite_toy": ["This field may not be null."],
        }))
    );
}

#[actix_web::test]
async fn test_create_dog_rejects_null_characters() {
    let app = init_app(test_state().await, "").await;
    let breed_id = create_breed(&app, labrador()).await;

    let mut body = buddy(breed_id);
    body["name"] = json!("Bu\u{0}ddy");
    let (status, errors) = send(&app, post_json("/dogs/", body)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        errors,
        Some(json!({"name": ["Null characters are not allowed."]}))
    );

    let (_, list) = send(&app, get("/dogs/")).await;
    assert_eq!(list, Some(json!([])));
}

#[actix_web::test]
async fn test_list_dogs_in_id_order() {
    let app = init_app(test_state().await, "").await;
    let breed_id = create_breed(&app, labrador()).await;

    for name in ["Rex", "Ace", "Max"] {
        let mut body = buddy(breed_id);
        body["name"] = json!(name);
        create_dog(&app, body).await;
    }

    for _ in 0..2 {
        let (status, list) = send(&app, get("/dogs/")).await;
        assert_eq!(status, StatusCode::OK);
        let names: Vec<String> = list
            .unwrap()
            .as_array()
            .unwrap()
            .iter()
            .map(|d| d["name"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(names, vec!["Rex", "Ace", "Max"]);
    }
}

#[actix_web::test]
async fn test_update_dog_moves_to_other_breed() {
    let app = init_app(test_state().await, "").await;
    let labrador_id = create_breed(&app, labrador()).await;
    let mut poodle = labrador();
    poodle["name"] = json!("Poodle");
    poodle["size"] = json!("M");
    let poodle_id = create_breed(&app, poodle).await;
    let dog_id = create_dog(&app, buddy(labrador_id)).await;

    let mut body = buddy(poodle_id);
    body["age"] = json!(4);
    let uri = format!("/dogs/{}", dog_id);
    let (status, dog) = send(&app, put_json(&uri, body)).await;
    assert_eq!(status, StatusCode::OK);
    let dog = dog.unwrap();
    assert_eq!(dog["id"], dog_id);
    assert_eq!(dog["age"], 4);
    assert_eq!(dog["breed"]["name"], "Poodle");
    assert_eq!(dog["breed_id"], poodle_id);
}

#[actix_web::test]
async fn test_update_dog_with_missing_breed_keeps_record() {
    let app = init_app(test_state().await, "").await;
    let breed_id = create_breed(&app, labrador()).await;
    let dog_id = create_dog(&app, buddy(breed_id)).await;
    let uri = format!("/dogs/{}", dog_id);

    let (status, errors) = send(&app, put_json(&uri, buddy(breed_id + 100))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(errors.unwrap().get("breed_id").is_some());

    let (_, dog) = send(&app, get(&uri)).await;
    assert_eq!(dog.unwrap()["breed_id"], breed_id);
}

#[actix_web::test]
async fn test_update_missing_dog_is_not_found() {
    let app = init_app(test_state().await, "").await;
    let breed_id = create_breed(&app, labrador()).await;

    let (status, body) = send(&app, put_json("/dogs/999999", buddy(breed_id))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, None);
}

#[actix_web::test]
async fn test_delete_dog() {
    let app = init_app(test_state().await, "").await;
    let breed_id = create_breed(&app, labrador()).await;
    let dog_id = create_dog(&app, buddy(breed_id)).await;
    let uri = format!("/dogs/{}", dog_id);

    let (status, _) = send(&app, delete(&uri)).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = send(&app, get(&uri)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, breed) = send(&app, get(&format!("/breeds/{}", breed_id))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(breed.unwrap()["name"], "Labrador");
}

#[actix_web::test]
async fn test_delete_breed_cascades_to_its_dogs() {
    let app = init_app(test_state().await, "").await;
    let labrador_id = create_breed(&app, labrador()).await;
    let mut beagle = labrador();
    beagle["name"] = json!("Beagle");
    let beagle_id = create_breed(&app, beagle).await;

    let doomed = vec![
        create_dog(&app, buddy(labrador_id)).await,
        create_dog(&app, buddy(labrador_id)).await,
    ];
    let survivor = create_dog(&app, buddy(beagle_id)).await;

    let (status, _) = send(&app, delete(&format!("/breeds/{}", labrador_id))).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    for id in doomed {
        let (status, _) = send(&app, get(&format!("/dogs/{}", id))).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
    let (status, _) = send(&app, get(&format!("/dogs/{}", survivor))).await;
    assert_eq!(status, StatusCode::OK);

    let (_, list) = send(&app, get("/dogs/")).await;
    assert_eq!(list.unwrap().as_array().unwrap().len(), 1);
}

#[actix_web::test]
async fn test_dog_signed_id_is_not_found() {
    let app = init_app(test_state().await, "").await;
    let breed_id = create_breed(&app, labrador()).await;
    let dog_id = create_dog(&app, buddy(breed_id)).await;

    for uri in [format!("/dogs/+{}", dog_id), "/dogs/x1".to_string()] {
        let (status, body) = send(&app, get(&uri)).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{}", uri);
        assert_eq!(body, None);
    }
    let (status, _) = send(&app, delete(&format!("/dogs/+{}", dog_id))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, get(&format!("/dogs/{}", dog_id))).await;
    assert_eq!(status, StatusCode::OK);
}

#[actix_web::test]
async fn test_dog_method_not_allowed() {
    let app = init_app(test_state().await, "").await;

    let req = test::TestRequest::put()
        .uri("/dogs/")
        .set_json(json!({}))
        .to_request();
    let (status, _) = send(&app, req).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}
