use crate::models::UserProfile;

pub fn render_login(error: Option<&str>) -> String {
    let error_html = match error {
        Some(message) => format!(r#"<p class="error" id="login-error">{}</p>"#, escape_html(message)),
        None => String::new(),
    };
    LOGIN_HTML
        .replace("{{CSS}}", SHARED_CSS)
        .replace("{{ERROR}}", &error_html)
}

pub fn render_profile(user: &UserProfile, ratio_svg: &str, bar_svg: &str) -> String {
    let full_name = format!("{} {}", user.first_name, user.last_name);
    PROFILE_HTML
        .replace("{{CSS}}", SHARED_CSS)
        .replace("{{LOGIN}}", &escape_html(&user.login))
        .replace("{{FULL_NAME}}", &escape_html(full_name.trim()))
        .replace("{{EMAIL}}", &escape_html(&user.email))
        .replace("{{DONE_MB}}", &format!("{:.2}", user.total_up as f64 / 1_000_000.0))
        .replace("{{RECEIVED_MB}}", &format!("{:.2}", user.total_down as f64 / 1_000_000.0))
        .replace("{{RATIO_SVG}}", ratio_svg)
        .replace("{{BAR_SVG}}", bar_svg)
}

pub fn render_fetch_error(message: &str) -> String {
    FETCH_ERROR_HTML
        .replace("{{CSS}}", SHARED_CSS)
        .replace("{{MESSAGE}}", &escape_html(message))
}

fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

const SHARED_CSS: &str = r#"
    :root {
      --ink: #2b2a28;
      --pass: #1B1A55;
      --fail: #535C91;
      --card: rgba(255, 255, 255, 0.92);
      --shadow: 0 24px 60px rgba(27, 26, 85, 0.16);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: linear-gradient(135deg, #f2f3fb, #dfe2f2 60%, #f6f3ee 100%);
      color: var(--ink);
      font-family: "Trebuchet MS", sans-serif;
      display: grid;
      place-items: center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(760px, 100%);
      background: var(--card);
      border-radius: 24px;
      box-shadow: var(--shadow);
      padding: 32px;
      display: grid;
      gap: 24px;
    }

    h1 {
      margin: 0;
      font-size: 1.9rem;
      color: var(--pass);
    }

    .subtitle {
      margin: 0;
      color: #5f5c57;
    }

    input {
      width: 100%;
      padding: 12px 14px;
      border-radius: 10px;
      border: 1px solid rgba(27, 26, 85, 0.25);
      font-size: 1rem;
    }

    button {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 12px 22px;
      font-size: 1rem;
      font-weight: 600;
      cursor: pointer;
      background: var(--pass);
      color: white;
    }

    .error {
      margin: 0;
      color: #c63b2b;
    }

    .cards {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
      gap: 16px;
    }

    .card {
      background: white;
      border-radius: 18px;
      padding: 18px;
      border: 1px solid rgba(27, 26, 85, 0.08);
    }

    .card h2 {
      margin: 0 0 12px;
      font-size: 1.15rem;
    }

    .hover-details {
      display: none;
      margin-top: 8px;
      color: #5f5c57;
      font-size: 0.9rem;
    }

    .card:hover .hover-details {
      display: block;
    }

    .chart-grid {
      stroke: rgba(27, 26, 85, 0.12);
    }

    .chart-axis {
      stroke: rgba(27, 26, 85, 0.4);
    }

    .chart-label {
      fill: #7a746d;
      font-size: 11px;
    }
"#;

const LOGIN_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <title>XP Dashboard - Sign in</title>
  <style>{{CSS}}</style>
</head>
<body>
  <main class="app">
    <header>
      <h1>XP Dashboard</h1>
      <p class="subtitle">Sign in to see your profile, audit ratio and XP history.</p>
    </header>

    <form id="login-form" method="post" action="/login">
      <div class="cards">
        <label>Username or email
          <input type="text" name="username" autocomplete="username" required />
        </label>
        <label>Password
          <input type="password" name="password" autocomplete="current-password" required />
        </label>
      </div>
      <p></p>
      <button type="submit">Sign in</button>
    </form>

    {{ERROR}}
  </main>
</body>
</html>
"#;

const PROFILE_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <title>XP Dashboard - Profile</title>
  <style>{{CSS}}</style>
</head>
<body>
  <main class="app">
    <header>
      <h1 id="welcome">Welcome, {{LOGIN}}!</h1>
      <p class="subtitle" id="full-name">Full Name: {{FULL_NAME}}</p>
      <p class="subtitle" id="email">Email: {{EMAIL}}</p>
    </header>

    <section class="cards">
      <div class="card" id="ratio-card">
        <h2>Audit ratio</h2>
        {{RATIO_SVG}}
        <p class="hover-details">Done: {{DONE_MB}} MB<br>Received: {{RECEIVED_MB}} MB</p>
      </div>
      <div class="card" id="xp-card">
        <h2>XP by month</h2>
        {{BAR_SVG}}
      </div>
    </section>

    <form method="post" action="/logout">
      <button type="submit" id="logout">Log out</button>
    </form>
  </main>
</body>
</html>
"#;

const FETCH_ERROR_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <title>XP Dashboard - Error</title>
  <style>{{CSS}}</style>
</head>
<body>
  <main class="app">
    <h1>Could not load your profile</h1>
    <p class="error">{{MESSAGE}}</p>
    <p class="subtitle">Reload the page to try again, or sign in with a fresh session.</p>
    <form method="post" action="/logout">
      <button type="submit">Back to sign in</button>
    </form>
  </main>
</body>
</html>
"#;
