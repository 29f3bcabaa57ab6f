pub mod categories;
pub mod words;

use actix_web::web;

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    // ── Category routes ──
    cfg.service(
        web::resource("/categories")
            .route(web::get().to(categories::get_categories))
            .route(web::post().to(categories::add_category)),
    );
    cfg.service(
        web::resource("/categories/{name}")
            .route(web::get().to(categories::get_category_by_name))
            .route(web::delete().to(categories::del_category)),
    );

    // ── Word routes (nested under their category) ──
    cfg.service(
        web::scope("/categories/{category_id}/words")
            .route("", web::get().to(words::get_words))
            .route("", web::post().to(words::add_word))
            .route("/{word_id}", web::delete().to(words::del_word)),
    );
}
