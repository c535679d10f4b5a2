use axum::{
    extract::{Path, RawQuery, State},
    http::StatusCode,
    response::IntoResponse,
};
use axum_extra::extract::CookieJar;
use strum::VariantArray;
use zagros_menu::{
    recommend, visible_items, FilterState, LocalizedText, MenuItem, PrefsStore, SortBy,
    CATEGORY_VEGETARIAN,
};

use crate::prefs::CookieStorage;
use crate::routes::AppState;
use crate::template::{filters, SiteMeta, Template};

/// One category tab. `href` re-serializes the whole filter state with
/// only the category swapped, so the URL stays the single source of
/// truth.
pub struct CategoryTab {
    pub name: String,
    pub href: String,
    pub active: bool,
}

pub struct ToggleLink {
    pub label_key: &'static str,
    pub href: String,
    pub active: bool,
}

pub struct SortLink {
    pub label_key: String,
    pub href: String,
    pub active: bool,
}

#[derive(askama::Template)]
#[template(path = "menu.html")]
pub struct MenuTemplate<'a> {
    pub current_path: &'static str,
    pub site: SiteMeta,
    pub locale: String,
    pub state: FilterState,
    pub tabs: Vec<CategoryTab>,
    pub toggles: Vec<ToggleLink>,
    pub sorts: Vec<SortLink>,
    pub items: Vec<&'a MenuItem>,
    pub recommended: Vec<&'a MenuItem>,
    pub jsonld: String,
}

#[derive(askama::Template)]
#[template(path = "partials/menu-item.html")]
pub struct MenuItemTemplate<'a> {
    pub locale: String,
    pub item: &'a MenuItem,
}

fn category_tabs(app: &AppState, state: &FilterState, locale: &str) -> Vec<CategoryTab> {
    let mut categories = app.catalog.display_categories();
    // The synthetic vegetarian entry filters on the flag, not the field.
    categories.push(zagros_menu::Category {
        id: CATEGORY_VEGETARIAN.to_owned(),
        name: LocalizedText {
            en: "Vegetarian".to_owned(),
            ku: "Riwekî".to_owned(),
        },
    });

    categories
        .into_iter()
        .map(|category| CategoryTab {
            name: category.name.get(locale).to_owned(),
            href: state.with_category(&category.id).href(),
            active: state.category == category.id,
        })
        .collect()
}

fn toggle_links(state: &FilterState) -> Vec<ToggleLink> {
    let flips: [(&'static str, fn(&mut FilterState)); 3] = [
        ("filter_popular", |s| s.popular = !s.popular),
        ("filter_seasonal", |s| s.seasonal = !s.seasonal),
        ("filter_vegetarian", |s| s.vegetarian = !s.vegetarian),
    ];

    flips
        .into_iter()
        .map(|(label_key, flip)| {
            let mut flipped = state.clone();
            flip(&mut flipped);
            let active = match label_key {
                "filter_popular" => state.popular,
                "filter_seasonal" => state.seasonal,
                _ => state.vegetarian,
            };
            ToggleLink {
                label_key,
                href: flipped.href(),
                active,
            }
        })
        .collect()
}

fn sort_links(state: &FilterState) -> Vec<SortLink> {
    SortBy::VARIANTS
        .iter()
        .map(|sort| {
            let mut sorted = state.clone();
            sorted.sort = *sort;
            SortLink {
                label_key: format!("sort_{sort}"),
                href: sorted.href(),
                active: state.sort == *sort,
            }
        })
        .collect()
}

#[tracing::instrument(skip_all)]
pub async fn page(
    template: Template,
    State(app): State<AppState>,
    jar: CookieJar,
    RawQuery(query): RawQuery,
) -> impl IntoResponse {
    let state = FilterState::parse_query(query.as_deref().unwrap_or(""));
    let locale = template.locale().to_owned();

    let items = visible_items(&app.catalog.items, &state);

    // Recommendations read the preference cookie but never write it.
    let store = PrefsStore::new(CookieStorage::from_jar(&jar));
    let prefs = store.read();
    let now = crate::hours::local_now(&app.config.site.timezone);
    let recommended = recommend(
        &app.catalog.items,
        &prefs,
        now,
        app.config.menu.recommended_count,
    );

    let jsonld = crate::seo::menu_jsonld(&app.config.site, &app.catalog, &locale).to_string();

    template.render(MenuTemplate {
        current_path: "menu",
        site: SiteMeta::from(&app.config.site),
        tabs: category_tabs(&app, &state, &locale),
        toggles: toggle_links(&state),
        sorts: sort_links(&state),
        items,
        recommended,
        locale,
        state,
        jsonld,
    })
}

/// GET /menu/item/{id} - detail partial for the item modal. Opening an
/// item counts as a view, so this also updates the preference cookie.
#[tracing::instrument(skip_all, fields(item = %id))]
pub async fn item_detail(
    template: Template,
    State(app): State<AppState>,
    jar: CookieJar,
    Path(id): Path<String>,
) -> impl IntoResponse {
    let item = crate::try_page_response!(opt: app.catalog.item(&id), template);

    let store = PrefsStore::new(CookieStorage::from_jar(&jar));
    let now = crate::hours::local_now(&app.config.site.timezone);
    store.track_view(item, now);

    let jar = match store.into_storage().take_update() {
        Some(cookie) => jar.add(cookie),
        None => jar,
    };

    let partial = MenuItemTemplate {
        locale: template.locale().to_owned(),
        item,
    };

    (jar, template.render(partial)).into_response()
}

/// POST /menu/view/{id} - explicit view tracking for clients that render
/// the detail without fetching the partial.
#[tracing::instrument(skip_all, fields(item = %id))]
pub async fn track_view(
    State(app): State<AppState>,
    jar: CookieJar,
    Path(id): Path<String>,
) -> impl IntoResponse {
    let Some(item) = app.catalog.item(&id) else {
        return StatusCode::NOT_FOUND.into_response();
    };

    let store = PrefsStore::new(CookieStorage::from_jar(&jar));
    let now = crate::hours::local_now(&app.config.site.timezone);
    store.track_view(item, now);

    let jar = match store.into_storage().take_update() {
        Some(cookie) => jar.add(cookie),
        None => jar,
    };

    (jar, StatusCode::NO_CONTENT).into_response()
}
