//! Server-rendered HTML pages.

use axum::Router;
use axum::extract::{Form, Path, RawQuery, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::{get, post};
use minijinja::{Environment, context};
use serde::Serialize;
use tracing::error;

use zooconnect::browse::{Listing, list};
use zooconnect::core::filter::FilterOptions;
use zooconnect::core::panel::FilterPanel;
use zooconnect::core::query::{QueryBinding, bind_panel_form, bind_query, to_query};
use zooconnect::core::types::{Continent, ViewMode, VolunteerTask, WildlifeType};
use zooconnect::experience::Experience;
use zooconnect::io::auth::{AuthForm, AuthMode, Notice, submit_application, submit_auth};

use crate::state::AppState;

const BASE_TEMPLATE: &str = include_str!("templates/base.html");
const HOME_TEMPLATE: &str = include_str!("templates/home.html");
const LISTING_TEMPLATE: &str = include_str!("templates/listing.html");
const DETAIL_TEMPLATE: &str = include_str!("templates/detail.html");
const AUTH_TEMPLATE: &str = include_str!("templates/auth.html");
const NOT_FOUND_TEMPLATE: &str = include_str!("templates/not_found.html");
const CARD_TEMPLATE: &str = include_str!("templates/card.html");

/// Template engine wrapper around minijinja.
pub struct Pages {
    env: Environment<'static>,
}

impl Pages {
    pub fn new() -> Self {
        let mut env = Environment::new();
        for (name, source) in [
            ("base.html", BASE_TEMPLATE),
            ("home.html", HOME_TEMPLATE),
            ("listing.html", LISTING_TEMPLATE),
            ("detail.html", DETAIL_TEMPLATE),
            ("auth.html", AUTH_TEMPLATE),
            ("not_found.html", NOT_FOUND_TEMPLATE),
            ("card.html", CARD_TEMPLATE),
        ] {
            env.add_template(name, source)
                .expect("bundled page template should be valid");
        }
        Self { env }
    }

    fn render<S: Serialize>(&self, name: &str, ctx: S) -> Result<String, minijinja::Error> {
        self.env.get_template(name)?.render(ctx)
    }
}

impl Default for Pages {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the HTML router.
pub fn page_router() -> Router<AppState> {
    Router::new()
        .route("/", get(home))
        .route("/experiences", get(listing_page).post(listing_form))
        .route("/experiences/{id}", get(detail_page))
        .route("/experiences/{id}/apply", post(apply_page))
        .route("/login", get(login_page).post(login_submit))
        .route("/register", get(register_page).post(register_submit))
}

/// Card and detail data for one experience.
#[derive(Debug, Serialize)]
struct ExperienceView<'a> {
    id: &'a str,
    title: &'a str,
    city: &'a str,
    country: &'a str,
    continent: Continent,
    cover_image: Option<&'a str>,
    gallery: Vec<&'a str>,
    description: &'a str,
    overview: &'a str,
    impact: &'a str,
    ethics: &'a str,
    wildlife: Vec<Described>,
    tasks: Vec<Described>,
    requirements: &'a [String],
    rating: f64,
    reviews_count: u32,
    duration: String,
    price: String,
    period: &'a str,
}

#[derive(Debug, Serialize)]
struct Described {
    name: &'static str,
    blurb: &'static str,
}

impl<'a> ExperienceView<'a> {
    fn from_experience(experience: &'a Experience) -> Self {
        Self {
            id: &experience.id,
            title: &experience.title,
            city: &experience.location.city,
            country: &experience.location.country,
            continent: experience.location.continent,
            cover_image: experience.cover_image(),
            gallery: experience.images.iter().skip(1).take(2).map(String::as_str).collect(),
            description: &experience.description,
            overview: &experience.overview,
            impact: &experience.impact,
            ethics: &experience.ethical_considerations,
            wildlife: experience
                .wildlife_types
                .iter()
                .map(|kind| Described {
                    name: kind.as_str(),
                    blurb: kind.blurb(),
                })
                .collect(),
            tasks: experience
                .volunteer_tasks
                .iter()
                .map(|task| Described {
                    name: task.as_str(),
                    blurb: task.blurb(),
                })
                .collect(),
            requirements: &experience.requirements,
            rating: experience.rating,
            reviews_count: experience.reviews_count,
            duration: experience.duration.label(),
            price: format_price(experience.pricing.amount, &experience.pricing.currency),
            period: &experience.pricing.period,
        }
    }
}

fn format_price(amount: f64, currency: &str) -> String {
    match currency {
        "USD" => format!("${}", amount),
        other => format!("{} {}", amount, other),
    }
}

/// A checkbox in the filter sidebar.
#[derive(Debug, Serialize)]
struct Checkbox {
    value: &'static str,
    checked: bool,
}

fn checkboxes<T: Copy + PartialEq>(
    all: &[T],
    selected: &[T],
    label: fn(T) -> &'static str,
) -> Vec<Checkbox> {
    all.iter()
        .map(|item| Checkbox {
            value: label(*item),
            checked: selected.contains(item),
        })
        .collect()
}

/// A quick-filter link on the home page.
#[derive(Debug, Serialize)]
struct QuickLink {
    label: &'static str,
    href: String,
}

fn quick_link(label: &'static str, options: &FilterOptions) -> QuickLink {
    QuickLink {
        label,
        href: format!("/experiences?{}", to_query(options, None)),
    }
}

fn continent_links() -> Vec<QuickLink> {
    Continent::ALL
        .iter()
        .map(|continent| {
            let options = FilterOptions {
                continent: vec![*continent],
                ..FilterOptions::default()
            };
            quick_link(continent.as_str(), &options)
        })
        .collect()
}

fn wildlife_links() -> Vec<QuickLink> {
    WildlifeType::ALL
        .iter()
        .map(|kind| {
            let options = FilterOptions {
                wildlife_types: vec![*kind],
                ..FilterOptions::default()
            };
            quick_link(kind.as_str(), &options)
        })
        .collect()
}

async fn home(State(state): State<AppState>) -> Response {
    let featured: Vec<ExperienceView<'_>> = state
        .catalog
        .featured()
        .into_iter()
        .take(state.config.listing.featured_limit)
        .map(ExperienceView::from_experience)
        .collect();
    let media = state.media.initial();
    render(
        &state,
        StatusCode::OK,
        "home.html",
        context! {
            featured => featured,
            media => media,
            total => state.catalog.len(),
            continents => continent_links(),
            wildlife_types => wildlife_links(),
        },
    )
}

/// GET /experiences - navigation parameters become the initial filters.
async fn listing_page(State(state): State<AppState>, RawQuery(query): RawQuery) -> Response {
    let binding = bind_query(query.as_deref().unwrap_or_default());
    listing_response(&state, binding)
}

/// POST /experiences - the filter panel's "Apply Filters", "Reset Filters"
/// and the layout toggle, which all submit the panel form.
async fn listing_form(State(state): State<AppState>, body: String) -> Response {
    listing_response(&state, bind_panel_form(&body))
}

fn listing_response(state: &AppState, binding: QueryBinding) -> Response {
    let mode = binding.view.unwrap_or(state.config.listing.default_view);
    let listing = list(&state.catalog, binding.options, binding.search);
    render_listing(state, &listing, mode)
}

fn render_listing(state: &AppState, listing: &Listing<'_>, mode: ViewMode) -> Response {
    let panel = FilterPanel::new(&listing.options);
    let draft = panel.draft();
    let duration = draft.duration.unwrap_or_default();
    let cards: Vec<ExperienceView<'_>> = listing
        .experiences
        .iter()
        .map(|experience| ExperienceView::from_experience(experience))
        .collect();
    render(
        state,
        StatusCode::OK,
        "listing.html",
        context! {
            experiences => cards,
            found => listing.summary.total,
            continent_count => listing.summary.continent_count(),
            catalog_total => state.catalog.len(),
            view => mode.as_str(),
            search => listing.search.as_deref(),
            filtered => !listing.options.is_unconstrained(),
            active_count => panel.active_count(),
            duration_label => panel.duration_label(),
            min_weeks => duration.min,
            max_weeks => duration.max,
            accessible => draft.accessible,
            wildlife_types => checkboxes(WildlifeType::ALL, &draft.wildlife_types, WildlifeType::as_str),
            volunteer_tasks => checkboxes(VolunteerTask::ALL, &draft.volunteer_tasks, VolunteerTask::as_str),
            continents => checkboxes(Continent::ALL, &draft.continent, Continent::as_str),
        },
    )
}

async fn detail_page(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    render_detail(&state, &id, None)
}

/// POST /experiences/{id}/apply - the detail page's "Apply Now".
async fn apply_page(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    match submit_application(&state.catalog, &id, state.config.application.delay()).await {
        Ok(notice) => render_detail(&state, &id, Some(notice)),
        Err(_) => not_found(&state),
    }
}

fn render_detail(state: &AppState, id: &str, notice: Option<Notice>) -> Response {
    let Some(experience) = state.catalog.get(id) else {
        return not_found(state);
    };
    render(
        state,
        StatusCode::OK,
        "detail.html",
        context! {
            experience => ExperienceView::from_experience(experience),
            notice => notice,
        },
    )
}

async fn login_page(State(state): State<AppState>) -> Response {
    render_auth(&state, AuthMode::Login, StatusCode::OK, None, None)
}

async fn register_page(State(state): State<AppState>) -> Response {
    render_auth(&state, AuthMode::Register, StatusCode::OK, None, None)
}

async fn login_submit(State(state): State<AppState>, Form(form): Form<AuthForm>) -> Response {
    auth_submit(&state, AuthMode::Login, &form).await
}

async fn register_submit(State(state): State<AppState>, Form(form): Form<AuthForm>) -> Response {
    auth_submit(&state, AuthMode::Register, &form).await
}

async fn auth_submit(state: &AppState, mode: AuthMode, form: &AuthForm) -> Response {
    match submit_auth(mode, form, state.config.auth.delay()).await {
        Ok(notice) => render_auth(state, mode, StatusCode::OK, Some(notice), None),
        Err(err) => render_auth(
            state,
            mode,
            StatusCode::BAD_REQUEST,
            None,
            Some(err.to_string()),
        ),
    }
}

fn render_auth(
    state: &AppState,
    mode: AuthMode,
    status: StatusCode,
    notice: Option<Notice>,
    problem: Option<String>,
) -> Response {
    render(
        state,
        status,
        "auth.html",
        context! {
            mode => mode,
            heading => mode.heading(),
            prompt => mode.prompt(),
            notice => notice,
            problem => problem,
        },
    )
}

/// Fallback for unknown pages.
pub async fn fallback(State(state): State<AppState>) -> Response {
    not_found(&state)
}

fn not_found(state: &AppState) -> Response {
    render(state, StatusCode::NOT_FOUND, "not_found.html", context! {})
}

fn render<S: Serialize>(state: &AppState, status: StatusCode, name: &str, ctx: S) -> Response {
    match state.pages.render(name, ctx) {
        Ok(html) => (status, Html(html)).into_response(),
        Err(err) => {
            error!(template = name, error = %err, "template render failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, header};
    use tower::ServiceExt;

    use super::*;
    use crate::test_app;

    async fn fetch(request: Request<Body>) -> (StatusCode, String) {
        let response = test_app().oneshot(request).await.expect("response");
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.expect("body");
        (status, String::from_utf8_lossy(&bytes).into_owned())
    }

    fn get(uri: &str) -> Request<Body> {
        Request::get(uri).body(Body::empty()).expect("request")
    }

    fn post_form(uri: &str, body: &str) -> Request<Body> {
        Request::post(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .expect("request")
    }

    #[tokio::test]
    async fn home_shows_featured_experiences() {
        let (status, html) = fetch(get("/")).await;
        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("Lion Rehabilitation Sanctuary"));
        assert!(html.contains("globe.jpg"));
    }

    #[tokio::test]
    async fn listing_applies_query_and_checks_boxes() {
        let (status, html) = fetch(get("/experiences?wildlifeType=Elephants&view=list")).await;
        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("Found <span class=\"count\">1</span> experiences"));
        assert!(html.contains("Elephant Haven Chiang Mai"));
        assert!(!html.contains("Lion Rehabilitation Sanctuary"));
        assert!(html.contains("value=\"Elephants\" checked"));
        assert!(html.contains("class=\"results list\""));
    }

    #[tokio::test]
    async fn listing_form_with_no_matches_shows_empty_state() {
        let (status, html) =
            fetch(post_form("/experiences", "continent=Europe&wildlifeType=Elephants")).await;
        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("No experiences match your filters"));
    }

    #[tokio::test]
    async fn detail_renders_tabs_and_open_ended_duration() {
        let (status, html) = fetch(get("/experiences/sea-turtle-costa-rica")).await;
        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("2 - 12+ weeks"));
        assert!(html.contains("Sea turtles, coral reefs, and various marine ecosystems."));
        assert!(html.contains("Requirements &amp; Eligibility"));
    }

    #[tokio::test]
    async fn missing_detail_is_not_found_page() {
        let (status, html) = fetch(get("/experiences/nope")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(html.contains("Experience not found"));
    }

    #[tokio::test]
    async fn apply_shows_notice() {
        let (status, html) = fetch(post_form("/experiences/cheetah-namibia/apply", "")).await;
        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("Application submitted!"));
    }

    #[tokio::test]
    async fn login_form_round_trip() {
        let (status, html) = fetch(get("/login")).await;
        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("Welcome back"));

        let (status, html) = fetch(post_form(
            "/register",
            "name=&email=a%40example.com&password=pw",
        ))
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(html.contains("name is required"));

        let (status, html) =
            fetch(post_form("/login", "email=a%40example.com&password=pw")).await;
        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("You are now logged in."));
    }

    #[tokio::test]
    async fn view_toggle_keeps_active_filters() {
        let (status, html) = fetch(get("/experiences?continent=Asia&view=grid")).await;
        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("value=\"Asia\" checked"));
        assert!(html.contains("form=\"filters\" name=\"view\" value=\"list\""));

        // The list toggle submits the panel form, hidden grid view first.
        let (status, html) = fetch(post_form(
            "/experiences",
            "view=grid&continent=Asia&minWeeks=1&maxWeeks=12&view=list",
        ))
        .await;
        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("class=\"results list\""));
        assert!(html.contains("Found <span class=\"count\">2</span> experiences"));
    }

    #[tokio::test]
    async fn apply_filters_keeps_current_view() {
        let (_, html) = fetch(get("/experiences?view=list")).await;
        assert!(html.contains("<input type=\"hidden\" name=\"view\" value=\"list\">"));

        let (status, html) =
            fetch(post_form("/experiences", "view=list&wildlifeType=Elephants")).await;
        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("class=\"results list\""));
        assert!(html.contains("Found <span class=\"count\">1</span> experiences"));
    }

    #[tokio::test]
    async fn reset_button_clears_filters() {
        let (status, html) =
            fetch(post_form("/experiences", "view=list&continent=Asia&reset=1")).await;
        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("Found <span class=\"count\">12</span> experiences"));
        assert!(html.contains("class=\"results list\""));
        assert!(!html.contains("value=\"Asia\" checked"));
    }

    #[tokio::test]
    async fn home_resolves_media_and_links_quick_filters() {
        let (_, html) = fetch(get("/")).await;
        assert!(html.contains("<script>"));
        assert!(html.contains("data-endpoint=\"/api/media\""));
        assert!(html.contains("navigator.connection"));
        assert!(html.contains("continent=North+America"));
        assert!(html.contains("wildlifeType=Big+Cats"));
        assert!(!html.contains("/donate"));
    }

    #[test]
    fn usd_prices_use_dollar_sign() {
        assert_eq!(format_price(850.0, "USD"), "$850");
        assert_eq!(format_price(99.5, "EUR"), "99.5 EUR");
    }
}
