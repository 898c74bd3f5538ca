use actix_web::{web, HttpResponse, Responder};

use crate::services::element_service::{
    is_calamity, is_recognized, is_supreme, is_vanilla, resolve, ElementGroup,
};
use crate::services::rules_service::{
    apply_bonus, are_compatible, bonus_multiplier, bonus_percentage, is_suitable_for_level,
};
use crate::structs::element_struct::Element;
use crate::structs::routes_struct::{
    compatibility_reason, ElementBonusRequest, ElementBonusResponse, ElementCompatibilityRequest,
    ElementCompatibilityResponse, ElementInfoResponse, ElementSuitabilityRequest,
    ElementSuitabilityResponse, ElementValidationRequest, ElementValidationResponse,
};

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("", web::get().to(list_elements))
        .route("/group/{group}", web::get().to(elements_by_group))
        .route("/validate", web::post().to(validate_element))
        .route("/bonus", web::post().to(element_bonus))
        .route("/compatibility", web::post().to(element_compatibility))
        .route("/suitability", web::post().to(element_suitability))
        .route("/{name}", web::get().to(get_element));
}

fn element_info(element: Element) -> ElementInfoResponse {
    ElementInfoResponse {
        name: element.name(),
        display_name: element.display_name(),
        description: element.description(),
        effect_key: element.effect_key(),
        color: element.color(),
        has_effect: element.has_effect(),
        is_vanilla: is_vanilla(element),
        is_calamity: is_calamity(element),
        is_supreme: is_supreme(element),
    }
}

pub async fn list_elements() -> impl Responder {
    let elements: Vec<ElementInfoResponse> = Element::all().map(element_info).collect();
    HttpResponse::Ok().json(elements)
}

pub async fn get_element(name: web::Path<String>) -> impl Responder {
    let element = resolve(Some(name.as_str()));
    HttpResponse::Ok().json(element_info(element))
}

pub async fn elements_by_group(group: web::Path<String>) -> impl Responder {
    let names: Vec<&'static str> = match ElementGroup::parse(&group) {
        Some(group) => group.members().map(Element::name).collect(),
        None => Element::all().map(Element::name).collect(),
    };
    HttpResponse::Ok().json(names)
}

pub async fn validate_element(body: web::Json<ElementValidationRequest>) -> impl Responder {
    let label = body.element_name.as_deref();
    let element = resolve(label);
    HttpResponse::Ok().json(ElementValidationResponse {
        element_name: element.name(),
        display_name: element.display_name(),
        is_valid: is_recognized(label),
        has_effect: element.has_effect(),
    })
}

pub async fn element_bonus(body: web::Json<ElementBonusRequest>) -> impl Responder {
    let element = resolve(body.element_name.as_deref());
    HttpResponse::Ok().json(ElementBonusResponse {
        base_damage: body.base_damage,
        element,
        element_display_name: element.display_name(),
        bonus_multiplier: bonus_multiplier(element),
        final_damage: apply_bonus(i64::from(body.base_damage), element),
        bonus_percentage: bonus_percentage(element),
    })
}

pub async fn element_compatibility(body: web::Json<ElementCompatibilityRequest>) -> impl Responder {
    let element1 = resolve(body.element1.as_deref());
    let element2 = resolve(body.element2.as_deref());
    let is_compatible = are_compatible(element1, element2);
    HttpResponse::Ok().json(ElementCompatibilityResponse {
        element1,
        element2,
        is_compatible,
        reason: compatibility_reason(is_compatible),
    })
}

pub async fn element_suitability(body: web::Json<ElementSuitabilityRequest>) -> impl Responder {
    let element = resolve(body.element_name.as_deref());
    HttpResponse::Ok().json(ElementSuitabilityResponse {
        element,
        element_display_name: element.display_name(),
        boss_level: body.boss_level,
        is_suitable: is_suitable_for_level(element, body.boss_level),
    })
}

#[cfg(test)]
mod tests {
    use actix_web::{test, App};
    use serde_json::{json, Value};

    use crate::routes;

    #[actix_web::test]
    async fn lists_every_element() {
        let app = test::init_service(App::new().configure(routes::index::config)).await;
        let req = test::TestRequest::get().uri("/api/v1/elements").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        let elements = body.as_array().unwrap();
        assert_eq!(elements.len(), 27);
        assert_eq!(elements[1]["name"], "FIRE");
        assert_eq!(elements[1]["displayName"], "Fogo");
        assert_eq!(elements[1]["isVanilla"], true);
        assert_eq!(elements[1]["color"], "#FF6B35");
    }

    #[actix_web::test]
    async fn unknown_element_resolves_to_neutral() {
        let app = test::init_service(App::new().configure(routes::index::config)).await;
        let req = test::TestRequest::get()
            .uri("/api/v1/elements/plasma")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["name"], "NEUTRAL");
        assert_eq!(body["hasEffect"], false);

        let req = test::TestRequest::get()
            .uri("/api/v1/elements/god_slayer")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["name"], "GOD_SLAYER");
        assert_eq!(body["isCalamity"], true);
        assert_eq!(body["isSupreme"], true);
    }

    #[actix_web::test]
    async fn group_listing() {
        let app = test::init_service(App::new().configure(routes::index::config)).await;
        let req = test::TestRequest::get()
            .uri("/api/v1/elements/group/supreme")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body, json!(["GOD_SLAYER", "COSMIC", "OMNI"]));

        let req = test::TestRequest::get()
            .uri("/api/v1/elements/group/other")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body.as_array().unwrap().len(), 27);
    }

    #[actix_web::test]
    async fn validation_distinguishes_explicit_neutral() {
        let app = test::init_service(App::new().configure(routes::index::config)).await;

        let req = test::TestRequest::post()
            .uri("/api/v1/elements/validate")
            .set_json(json!({"elementName": "neutral"}))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["isValid"], true);

        let req = test::TestRequest::post()
            .uri("/api/v1/elements/validate")
            .set_json(json!({"elementName": "plasma"}))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["elementName"], "NEUTRAL");
        assert_eq!(body["isValid"], false);
    }

    #[actix_web::test]
    async fn bonus_uses_supreme_multiplier_for_god_slayer() {
        let app = test::init_service(App::new().configure(routes::index::config)).await;
        let req = test::TestRequest::post()
            .uri("/api/v1/elements/bonus")
            .set_json(json!({"baseDamage": 50, "elementName": "god_slayer"}))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["element"], "GOD_SLAYER");
        assert_eq!(body["bonusMultiplier"], 2.5);
        assert_eq!(body["finalDamage"], 125);
        assert_eq!(body["bonusPercentage"], "150%");
    }

    #[actix_web::test]
    async fn compatibility_and_suitability() {
        let app = test::init_service(App::new().configure(routes::index::config)).await;

        let req = test::TestRequest::post()
            .uri("/api/v1/elements/compatibility")
            .set_json(json!({"element1": "fire", "element2": "brimstone"}))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["isCompatible"], false);

        let req = test::TestRequest::post()
            .uri("/api/v1/elements/suitability")
            .set_json(json!({"elementName": "fire", "bossLevel": 8}))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["isSuitable"], false);
        assert_eq!(body["bossLevel"], 8);
    }

    #[actix_web::test]
    async fn malformed_body_is_rejected() {
        let app = test::init_service(App::new().configure(routes::index::config)).await;
        let req = test::TestRequest::post()
            .uri("/api/v1/elements/bonus")
            .set_json(json!({"elementName": "fire"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], false);
    }
}
