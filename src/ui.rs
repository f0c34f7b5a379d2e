use crate::models::{DailyMoodPoint, DashboardResponse, MoodEntry, UserData};
use crate::mood::{Mood, mood_emoji};

pub fn render_index(dashboard: &DashboardResponse, user: &UserData) -> String {
    let slots = [
        ("GREETING", escape_html(&dashboard.greeting)),
        ("NAME", escape_html(&user.name)),
        ("AVATAR", escape_html(&user.avatar)),
        (
            "PREMIUM",
            if user.is_premium { "Premium" } else { "Free" }.to_string(),
        ),
        ("TODAY", render_today(dashboard.today.as_ref())),
        (
            "WEEKLY",
            format!("{}% positive", dashboard.weekly_positive_percent),
        ),
        ("STREAK", format!("{} days", dashboard.streak_days)),
        ("WEEK_BARS", render_week(&dashboard.last_7_days)),
        ("MOOD_OPTIONS", render_mood_options()),
    ];
    fill_template(INDEX_HTML, &slots)
}

/// Substitutes `{{KEY}}` markers in one left-to-right pass. Substituted values
/// are never rescanned; unknown markers are copied through.
fn fill_template(template: &str, slots: &[(&str, String)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find("{{") {
        out.push_str(&rest[..open]);
        let after = &rest[open + 2..];
        let Some(close) = after.find("}}") else {
            rest = &rest[open..];
            break;
        };
        let key = &after[..close];
        match slots.iter().find(|(name, _)| *name == key) {
            Some((_, value)) => out.push_str(value),
            None => out.push_str(&rest[open..open + 2 + close + 2]),
        }
        rest = &after[close + 2..];
    }
    out.push_str(rest);
    out
}

fn render_today(entry: Option<&MoodEntry>) -> String {
    match entry {
        Some(entry) => format!(
            r#"<div class="today">
        <div class="emoji-large">{emoji}</div>
        <div>
          <h3>{label}</h3>
          <p>{text}</p>
          <p class="sentiment {class}">AI Analysis: {summary}</p>
        </div>
      </div>"#,
            emoji = mood_emoji(&entry.mood),
            label = escape_html(&entry.mood.replace('-', " ")),
            text = escape_html(&entry.text),
            class = entry.sentiment.label.as_lowercase(),
            summary = entry.sentiment.summary(),
        ),
        None => r#"<div class="today empty"><span class="emoji-large">📅</span><p>No mood logged today</p></div>"#
            .to_string(),
    }
}

fn render_week(points: &[DailyMoodPoint]) -> String {
    points
        .iter()
        .map(|point| {
            let day = point.date.get(5..).unwrap_or(&point.date);
            format!(
                r#"<div class="bar" title="{date}"><span style="height: {height}%"></span><small>{day}</small></div>"#,
                date = point.date,
                height = u32::from(point.value) * 20,
                day = day,
            )
        })
        .collect::<Vec<_>>()
        .join("\n        ")
}

fn render_mood_options() -> String {
    Mood::ALL
        .iter()
        .rev()
        .map(|mood| {
            format!(
                r#"<label class="mood-option"><input type="radio" name="mood" value="{value}" required /><span title="{label}">{emoji}</span></label>"#,
                value = mood.as_str(),
                label = mood.display_label(),
                emoji = mood.emoji(),
            )
        })
        .collect::<Vec<_>>()
        .join("\n          ")
}

fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Moodify</title>
  <style>
    :root {
      --teal: #2ec4b6;
      --rose: #ff6b81;
      --sun: #ffd23f;
      --ink: #1f2933;
      --muted: #6b7280;
      --card: #ffffff;
      --shadow: 0 20px 50px rgba(31, 41, 51, 0.12);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: linear-gradient(160deg, #f0fdfa, #f9fafb 60%);
      color: var(--ink);
      font-family: "Inter", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(760px, 100%);
      display: grid;
      gap: 20px;
    }

    header {
      display: flex;
      align-items: center;
      justify-content: space-between;
    }

    h1 {
      margin: 0;
      font-size: clamp(1.6rem, 4vw, 2.2rem);
    }

    .badge {
      padding: 6px 12px;
      border-radius: 999px;
      background: rgba(46, 196, 182, 0.12);
      color: var(--teal);
      font-weight: 600;
    }

    .card {
      background: var(--card);
      border-radius: 20px;
      padding: 22px;
      box-shadow: var(--shadow);
    }

    .card h2 {
      margin: 0 0 12px;
      font-size: 1.1rem;
    }

    .today {
      display: flex;
      gap: 16px;
      align-items: center;
    }

    .emoji-large {
      font-size: 3rem;
    }

    .sentiment.positive { color: #15803d; }
    .sentiment.negative { color: #be123c; }
    .sentiment.neutral { color: #a16207; }

    .stats {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
      gap: 16px;
    }

    .stats .value {
      font-size: 1.6rem;
      font-weight: 700;
      color: var(--teal);
    }

    .week {
      display: grid;
      grid-template-columns: repeat(7, 1fr);
      gap: 8px;
      height: 140px;
      align-items: end;
    }

    .bar {
      display: grid;
      gap: 4px;
      height: 100%;
      align-items: end;
      text-align: center;
      color: var(--muted);
    }

    .bar span {
      display: block;
      border-radius: 8px 8px 4px 4px;
      background: var(--teal);
    }

    form {
      display: grid;
      gap: 14px;
    }

    .moods {
      display: flex;
      justify-content: space-between;
    }

    .mood-option input {
      display: none;
    }

    .mood-option span {
      font-size: 2.2rem;
      cursor: pointer;
      opacity: 0.5;
      transition: transform 150ms ease, opacity 150ms ease;
    }

    .mood-option input:checked + span {
      opacity: 1;
      transform: scale(1.2);
    }

    textarea {
      min-height: 110px;
      border-radius: 14px;
      border: 1px solid #e5e7eb;
      padding: 12px;
      font: inherit;
    }

    button {
      border: none;
      border-radius: 999px;
      padding: 14px 20px;
      font-size: 1rem;
      font-weight: 600;
      background: var(--teal);
      color: white;
      cursor: pointer;
    }

    button:disabled {
      opacity: 0.6;
      cursor: progress;
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>{{GREETING}}, {{NAME}} {{AVATAR}}</h1>
      <span class="badge">{{PREMIUM}}</span>
    </header>

    <section class="card">
      <h2>Today's mood</h2>
      {{TODAY}}
    </section>

    <section class="stats">
      <div class="card">
        <h2>This week</h2>
        <span class="value">{{WEEKLY}}</span>
      </div>
      <div class="card">
        <h2>Streak</h2>
        <span class="value">{{STREAK}}</span>
      </div>
    </section>

    <section class="card">
      <h2>Last 7 days</h2>
      <div class="week">
        {{WEEK_BARS}}
      </div>
    </section>

    <section class="card">
      <h2>How are you feeling?</h2>
      <form id="mood-form" method="post" action="/entries">
        <div class="moods">
          {{MOOD_OPTIONS}}
        </div>
        <textarea name="text" placeholder="What's on your mind?" required></textarea>
        <button id="submit" type="submit">Log mood</button>
      </form>
    </section>
  </main>

  <script>
    const form = document.getElementById('mood-form');
    const submit = document.getElementById('submit');
    form.addEventListener('submit', () => {
      submit.disabled = true;
      submit.textContent = 'Analyzing…';
    });
  </script>
</body>
</html>
"#;
