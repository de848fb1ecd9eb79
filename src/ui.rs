use crate::config::Config;
use crate::insights::Streak;
use crate::models::Mood;
use crate::session::{Goal, Screen, Session};
use crate::suggestions::{Suggestion, GENTLE_MESSAGE, PRACTICES};
use chrono::{DateTime, Local, Utc};
use std::fmt::Write;

pub fn render_index(session: &Session, config: &Config) -> String {
    let content = match session.screen() {
        Screen::Onboarding => render_onboarding(session, config),
        Screen::Mood => render_mood(session),
        Screen::Suggestions => render_suggestions(),
        Screen::Journal => render_journal(session),
        Screen::Insights => render_insights(session),
    };

    PAGE_HTML
        .replace("{{NAV}}", &render_nav(session.screen()))
        .replace("{{CONTENT}}", &content)
}

/// Escapes text for use in element content and quoted attributes.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
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

fn format_at(at: DateTime<Utc>) -> String {
    at.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string()
}

fn render_nav(active: Screen) -> String {
    let mut nav = String::new();
    for screen in Screen::ALL {
        let class = if screen == active { "chip active" } else { "chip" };
        let _ = write!(
            nav,
            r#"<form method="post" action="/screen"><input type="hidden" name="screen" value="{key}" /><button class="{class}" type="submit">{label}</button></form>"#,
            key = screen.key(),
            label = screen.label(),
        );
    }
    nav
}

fn render_onboarding(session: &Session, config: &Config) -> String {
    let mut goals = String::new();
    for goal in Goal::ALL {
        let class = if session.goals().contains(&goal) { "chip active" } else { "chip" };
        let _ = write!(
            goals,
            r#"<form method="post" action="/goals/toggle"><input type="hidden" name="goal" value="{key}" /><button class="{class}" type="submit">{label}</button></form>"#,
            key = goal.key(),
            label = goal.label(),
        );
    }

    format!(
        r#"<section class="grid two">
      <div class="card">
        <div class="scene"><spline-viewer url="{scene}"></spline-viewer></div>
        <h1>Welcome to your calm space</h1>
        <p class="muted">Track your emotions, journal your thoughts, and receive gentle suggestions to support your mental wellness.</p>
      </div>
      <div class="stack">
        <div class="card">
          <p class="muted">Choose your goals</p>
          <div class="chips">{goals}</div>
        </div>
        <div class="card row">
          <div>
            <p class="strong">Ready to begin?</p>
            <p class="muted">A few seconds each day makes a difference.</p>
          </div>
          <form method="post" action="/screen"><input type="hidden" name="screen" value="mood" /><button class="primary" type="submit">Start</button></form>
        </div>
      </div>
    </section>"#,
        scene = escape_html(&config.scene_url),
    )
}

fn render_suggestion_block(suggestion: Suggestion) -> String {
    format!(
        r#"<div class="suggestion"><p class="strong">{}</p><p>{}</p></div>"#,
        escape_html(suggestion.title),
        escape_html(suggestion.detail),
    )
}

fn render_mood(session: &Session) -> String {
    let drafts = session.drafts();

    let mut options = String::new();
    for mood in Mood::ALL {
        let checked = if drafts.selected_mood == Some(mood) { " checked" } else { "" };
        let _ = write!(
            options,
            r#"<label class="mood mood-{key}"><input type="radio" name="mood" value="{key}"{checked} /><span class="emoji">{emoji}</span><span>{label}</span></label>"#,
            key = mood.key(),
            emoji = mood.emoji(),
            label = mood.label(),
        );
    }

    let recent = if session.moods().is_empty() {
        r#"<p class="muted">No logs yet. Your last 7 moods will appear here.</p>"#.to_string()
    } else {
        let mut items = String::from(r#"<ul class="list">"#);
        for entry in session.moods().entries() {
            let note = entry
                .note
                .as_deref()
                .map(|note| format!(r#"<p class="muted">{}</p>"#, escape_html(note)))
                .unwrap_or_default();
            let _ = write!(
                items,
                r#"<li><span class="emoji">{emoji}</span><div><p class="strong">{label}</p>{note}</div><span class="time">{at}</span></li>"#,
                emoji = entry.mood.emoji(),
                label = entry.mood.label(),
                at = format_at(entry.at),
            );
        }
        items.push_str("</ul>");
        items
    };

    format!(
        r#"<section class="grid three">
      <div class="card span-two">
        <h2>How are you feeling?</h2>
        <form method="post" action="/mood">
          <div class="moods">{options}</div>
          <label class="muted" for="note">Add a note (optional)</label>
          <textarea id="note" name="note" placeholder="Write a few words about your mood...">{note}</textarea>
          <div class="row start">
            <button class="primary" type="submit">Save mood</button>
            {selected}
          </div>
        </form>
      </div>
      <div class="card">
        <h3>Quick suggestion</h3>
        <p class="muted">Based on your latest mood</p>
        {suggestion}
      </div>
    </section>
    <section class="card">
      <h3>Recent moods</h3>
      {recent}
    </section>"#,
        note = escape_html(&drafts.note),
        selected = drafts
            .selected_mood
            .map(|mood| format!(r#"<span class="muted">Selected: {}</span>"#, mood.label()))
            .unwrap_or_default(),
        suggestion = render_suggestion_block(session.suggestion()),
    )
}

fn render_suggestions() -> String {
    let mut cards = String::new();
    for card in PRACTICES {
        let _ = write!(
            cards,
            r#"<div class="card row practice"><div><p class="strong">{}</p><p class="muted">{}</p></div><button class="ghost" type="button">Start</button></div>"#,
            escape_html(card.title),
            escape_html(card.subtitle),
        );
    }

    format!(
        r#"<section class="grid two">{cards}</section>
    <section class="card row">
      <div class="avatar">AI</div>
      <div>
        <p class="strong">Gentle AI</p>
        <p class="muted">&ldquo;{message}&rdquo;</p>
      </div>
    </section>"#,
        message = escape_html(GENTLE_MESSAGE),
    )
}

fn render_journal(session: &Session) -> String {
    let journal = session.journal();

    let entries = if journal.is_empty() {
        r#"<p class="muted">No entries yet. Your saved notes will appear here.</p>"#.to_string()
    } else {
        let mut items = String::from(r#"<ul class="list">"#);
        for entry in journal.entries() {
            let _ = write!(
                items,
                r#"<li class="entry"><span class="time">{}</span><p class="body">{}</p></li>"#,
                format_at(entry.at),
                escape_html(&entry.body),
            );
        }
        items.push_str("</ul>");
        items
    };

    format!(
        r#"<section class="card">
      <h2>Journal</h2>
      <p class="muted">Prompt: {prompt}</p>
      <form method="post" action="/journal">
        <textarea name="body" placeholder="Write freely...">{draft}</textarea>
        <div class="row start">
          <button class="primary" type="submit">Save</button>
          <button class="ghost" type="submit" formaction="/journal/clear">Clear</button>
        </div>
      </form>
    </section>
    <section class="card">
      <h3>Entries</h3>
      {entries}
    </section>"#,
        prompt = escape_html(journal.prompt()),
        draft = escape_html(&session.drafts().journal),
    )
}

fn render_streak(streak: &Streak) -> String {
    let cells: String = streak
        .cells
        .iter()
        .map(|filled| {
            if *filled {
                r#"<span class="cell filled"></span>"#
            } else {
                r#"<span class="cell"></span>"#
            }
        })
        .collect();

    format!(
        r#"<h3>Streak</h3>
        <p class="big">{count}<span class="muted"> days</span></p>
        <p class="muted">Keep going! Tiny steps count.</p>
        <div class="cells">{cells}</div>"#,
        count = streak.count,
    )
}

fn render_insights(session: &Session) -> String {
    let trend = session.trend();

    let mut markers = String::new();
    for point in &trend.points {
        let _ = write!(
            markers,
            r##"<circle cx="{}" cy="{}" r="4" fill="#6366f1" />"##,
            point.x, point.y
        );
    }

    let badges: String = session
        .achievements()
        .into_iter()
        .map(|badge| format!(r#"<span class="badge">{}</span>"#, badge.label()))
        .collect();

    format!(
        r##"<section class="grid three">
      <div class="card span-two">
        <div class="row">
          <h3>Mood trend</h3>
          <span class="time">{label}</span>
        </div>
        <svg class="trend" viewBox="0 0 560 160" role="img" aria-label="Mood trend">
          <defs>
            <linearGradient id="grad" x1="0" x2="0" y1="0" y2="1">
              <stop offset="0%" stop-color="#a5b4fc" stop-opacity="0.9" />
              <stop offset="100%" stop-color="#93c5fd" stop-opacity="0.4" />
            </linearGradient>
          </defs>
          <polyline fill="none" stroke="url(#grad)" stroke-width="3" points="{polyline}" />
          {markers}
        </svg>
      </div>
      <div class="card">{streak}</div>
    </section>
    <section class="card">
      <h3>Achievements</h3>
      <div class="chips">{badges}</div>
    </section>"##,
        label = escape_html(&trend.label),
        polyline = trend.polyline,
        streak = render_streak(&session.streak()),
    )
}

const PAGE_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Calm Companion</title>
  <script type="module" src="https://unpkg.com/@splinetool/viewer/build/spline-viewer.js"></script>
  <style>
    :root {
      --ink: #1f2937;
      --muted: #4b5563;
      --accent: #6366f1;
      --card: rgba(255, 255, 255, 0.7);
      --border: rgba(255, 255, 255, 0.6);
      --shadow: 0 8px 30px rgba(0, 0, 0, 0.06);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: linear-gradient(135deg, #eff6ff, #eef2ff 50%, #fff1f2);
      color: var(--ink);
      font-family: "Inter", "Trebuchet MS", sans-serif;
    }

    header {
      display: flex;
      flex-wrap: wrap;
      align-items: center;
      justify-content: space-between;
      gap: 12px;
      padding: 16px 24px;
    }

    nav, .chips, .row, .cells {
      display: flex;
      flex-wrap: wrap;
      gap: 8px;
    }

    .row {
      align-items: center;
      justify-content: space-between;
    }

    .row.start {
      justify-content: flex-start;
    }

    main {
      display: grid;
      gap: 24px;
      max-width: 1024px;
      margin: 0 auto;
      padding: 0 24px 48px;
    }

    .grid {
      display: grid;
      gap: 24px;
    }

    .grid.two {
      grid-template-columns: repeat(auto-fit, minmax(320px, 1fr));
    }

    .grid.three {
      grid-template-columns: 2fr 1fr;
    }

    .stack {
      display: grid;
      gap: 16px;
    }

    .card {
      border-radius: 16px;
      background: var(--card);
      backdrop-filter: blur(12px);
      border: 1px solid var(--border);
      box-shadow: var(--shadow);
      padding: 20px;
    }

    .scene {
      height: 360px;
      border-radius: 12px;
      overflow: hidden;
    }

    h1, h2, h3, p {
      margin: 0 0 8px;
    }

    .muted {
      color: var(--muted);
      font-size: 0.9rem;
    }

    .strong {
      font-weight: 600;
    }

    .big {
      font-size: 2.25rem;
      font-weight: 600;
    }

    button {
      cursor: pointer;
      border-radius: 999px;
      font-size: 0.9rem;
      padding: 8px 16px;
      border: 1px solid var(--border);
    }

    .chip {
      background: rgba(255, 255, 255, 0.6);
      color: var(--muted);
    }

    .chip.active {
      background: rgba(255, 255, 255, 0.9);
      color: var(--ink);
    }

    .primary {
      background: var(--accent);
      color: white;
      border: none;
    }

    .ghost {
      background: white;
      border-color: #e5e7eb;
    }

    .moods {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(110px, 1fr));
      gap: 12px;
      margin-bottom: 16px;
    }

    .mood {
      display: grid;
      gap: 6px;
      padding: 16px;
      border-radius: 16px;
      cursor: pointer;
      border: 1px solid var(--border);
    }

    .mood input {
      display: none;
    }

    .mood:has(input:checked) {
      outline: 2px solid #a5b4fc;
    }

    .mood-joy { background: linear-gradient(#bfdbfe, #dbeafe); }
    .mood-calm { background: linear-gradient(#c7d2fe, #e0e7ff); }
    .mood-ok { background: linear-gradient(#ddd6fe, #ede9fe); }
    .mood-anxious { background: linear-gradient(#fef3c7, #ffedd5); }
    .mood-sad { background: linear-gradient(#ffe4e6, #fce7f3); }

    .emoji {
      font-size: 1.75rem;
    }

    textarea {
      width: 100%;
      min-height: 120px;
      margin: 8px 0 12px;
      padding: 12px;
      border-radius: 12px;
      border: 1px solid var(--border);
      background: rgba(255, 255, 255, 0.7);
      font: inherit;
    }

    .suggestion {
      border-radius: 12px;
      padding: 16px;
      background: linear-gradient(135deg, rgba(199, 210, 254, 0.7), rgba(191, 219, 254, 0.7));
    }

    .list {
      list-style: none;
      margin: 0;
      padding: 0;
      display: grid;
      gap: 12px;
    }

    .list li {
      display: flex;
      gap: 12px;
      align-items: flex-start;
    }

    .list li.entry {
      display: block;
      padding: 12px;
      border-radius: 12px;
      background: rgba(255, 255, 255, 0.7);
    }

    .body {
      white-space: pre-wrap;
    }

    .time {
      margin-left: auto;
      font-size: 0.75rem;
      color: #6b7280;
    }

    .avatar {
      height: 36px;
      width: 36px;
      border-radius: 50%;
      background: var(--accent);
      color: white;
      display: grid;
      place-items: center;
      font-size: 0.75rem;
    }

    .trend {
      width: 100%;
      height: 160px;
    }

    .cell {
      height: 32px;
      width: 32px;
      border-radius: 8px;
      background: rgba(229, 231, 235, 0.8);
    }

    .cell.filled {
      background: #818cf8;
    }

    .badge {
      border-radius: 999px;
      background: rgba(255, 255, 255, 0.8);
      padding: 4px 12px;
      font-size: 0.9rem;
    }

    @media (max-width: 720px) {
      .grid.three {
        grid-template-columns: 1fr;
      }
    }
  </style>
</head>
<body>
  <header>
    <div>
      <p class="muted">Mindful</p>
      <p class="strong">Calm Companion</p>
    </div>
    <nav>{{NAV}}</nav>
  </header>
  <main>
    {{CONTENT}}
  </main>
</body>
</html>
"#;
