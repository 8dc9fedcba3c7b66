use crate::errors::DashboardError;
use crate::models::{LoginForm, MonthlyXpBucket, UserProfile};
use crate::state::AppState;
use crate::{auth, charts, profile, stats, ui};
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    Form, Json,
};
use tracing::{error, info, warn};

pub async fn index() -> Html<String> {
    Html(ui::render_login(None))
}

pub async fn login(State(state): State<AppState>, Form(form): Form<LoginForm>) -> Response {
    match auth::login(
        &state.http,
        &state.config.auth_url,
        &form.username,
        &form.password,
    )
    .await
    {
        Ok(token) => {
            if let Err(err) = state.session.save(&token).await {
                error!("failed to persist session: {err}");
                return err.into_response();
            }
            info!("login succeeded for {}", form.username);
            Redirect::to("/profile").into_response()
        }
        Err(err) => {
            warn!("login failed for {}: {err}", form.username);
            (
                StatusCode::UNAUTHORIZED,
                Html(ui::render_login(Some("Authentication failed"))),
            )
                .into_response()
        }
    }
}

pub async fn profile_page(State(state): State<AppState>) -> Response {
    // No token: back to the login view without touching the upstream.
    let Some(token) = state.session.load().await else {
        return Redirect::to("/").into_response();
    };

    match profile::fetch_profile(&state.http, &state.config.graphql_url, &token).await {
        Ok(user) => Html(render_profile_page(&user)).into_response(),
        Err(err) => {
            error!("profile fetch failed: {err}");
            (
                StatusCode::BAD_GATEWAY,
                Html(ui::render_fetch_error("The profile service did not return usable data.")),
            )
                .into_response()
        }
    }
}

pub async fn logout(State(state): State<AppState>) -> Result<Redirect, DashboardError> {
    state.session.clear().await?;
    info!("session cleared");
    Ok(Redirect::to("/"))
}

pub async fn get_xp(
    State(state): State<AppState>,
) -> Result<Json<Vec<MonthlyXpBucket>>, DashboardError> {
    let token = state.session.load().await.ok_or(DashboardError::MissingToken)?;
    let user = profile::fetch_profile(&state.http, &state.config.graphql_url, &token).await?;

    Ok(Json(stats::aggregate_monthly_xp(
        &user.transactions,
        &stats::MONTH_LABELS,
    )))
}

fn render_profile_page(user: &UserProfile) -> String {
    let buckets = stats::aggregate_monthly_xp(&user.transactions, &stats::MONTH_LABELS);
    let ratio_svg = charts::render_audit_ring(user.audit_ratio, user.total_up, user.total_down);
    let bar_svg = charts::render_xp_bar_chart(&buckets);
    ui::render_profile(user, &ratio_svg, &bar_svg)
}
