use axum::{
    routing::{delete, get, post, put},
    Router,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{auth, card, card_item, field, group, role, stats, user},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "cardkeeper", description = "Tabletop card and campaign group API"),
    paths(
        auth::login,
        auth::discord_login,
        auth::me,
        user::get_users,
        user::get_profile,
        user::get_user,
        user::update_user,
        role::get_roles,
        role::create_role,
        role::update_role,
        role::delete_role,
        role::assign_role,
        role::remove_role,
        role::get_role_users,
        field::get_fields,
        field::create_field,
        field::update_field,
        field::delete_field,
        card::get_cards,
        card::get_cards_by_type,
        card::get_card,
        card::create_card,
        card::update_card,
        card::delete_card,
        card_item::get_card_items,
        card_item::add_card_item,
        card_item::update_card_item,
        card_item::remove_card_item,
        card_item::get_item_usage,
        group::get_groups,
        group::get_group,
        group::create_group,
        group::update_group,
        group::delete_group,
        group::add_member,
        group::attach_card,
        group::detach_card,
        group::get_bank,
        group::create_bank_entry,
        stats::get_stats,
        stats::execute_query,
    )
)]
pub struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/auth/login", get(auth::login))
        .route("/api/auth/discord", post(auth::discord_login))
        .route("/api/auth/me", get(auth::me))
        .route("/api/users", get(user::get_users))
        .route("/api/users/profile", get(user::get_profile))
        .route("/api/users/{id}", get(user::get_user).put(user::update_user))
        .route("/api/admin/roles", get(role::get_roles).post(role::create_role))
        .route("/api/admin/roles/assign", post(role::assign_role))
        .route(
            "/api/admin/roles/{id}",
            put(role::update_role).delete(role::delete_role),
        )
        .route("/api/admin/roles/{id}/users", get(role::get_role_users))
        .route(
            "/api/admin/roles/{id}/users/{user_id}",
            delete(role::remove_role),
        )
        .route(
            "/api/admin/fields",
            get(field::get_fields).post(field::create_field),
        )
        .route(
            "/api/admin/fields/{id}",
            put(field::update_field).delete(field::delete_field),
        )
        .route("/api/cards", get(card::get_cards).post(card::create_card))
        .route("/api/cards/type/{type}", get(card::get_cards_by_type))
        .route(
            "/api/cards/items/{item_id}/usage",
            get(card_item::get_item_usage),
        )
        .route(
            "/api/cards/{id}",
            get(card::get_card)
                .put(card::update_card)
                .delete(card::delete_card),
        )
        .route(
            "/api/cards/{id}/items",
            get(card_item::get_card_items).post(card_item::add_card_item),
        )
        .route(
            "/api/cards/{id}/items/{item_id}",
            put(card_item::update_card_item).delete(card_item::remove_card_item),
        )
        .route("/api/groups", get(group::get_groups).post(group::create_group))
        .route(
            "/api/groups/{id}",
            get(group::get_group)
                .put(group::update_group)
                .delete(group::delete_group),
        )
        .route("/api/groups/{id}/members", post(group::add_member))
        .route("/api/groups/{id}/cards", post(group::attach_card))
        .route("/api/groups/{id}/cards/{card_id}", delete(group::detach_card))
        .route(
            "/api/groups/{id}/bank",
            get(group::get_bank).post(group::create_bank_entry),
        )
        .route("/api/db-stats", get(stats::get_stats))
        .route("/api/db-stats/execute-query", post(stats::execute_query))
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", ApiDoc::openapi()))
}
