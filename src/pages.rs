// src/pages.rs

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

/// Phrases offered as one-click examples on the landing page.
const EXAMPLE_PHRASES: &[&str] = &["dashboard", "a blog about cats", "a playable tic-tac-toe game"];

/// Landing page: collects a phrase and navigates to its generated page.
const INDEX_HTML: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Generate a Page with AI</title>
<script src="https://cdn.tailwindcss.com"></script>
</head>
<body class="font-sans">
<div class="flex items-center justify-center min-h-screen">
<main class="flex flex-col gap-8 items-center p-8">
<h1 class="text-4xl font-bold text-center">Generate a Page with AI</h1>
<p class="text-lg text-center text-gray-600">Enter a word or phrase, and we'll generate a webpage for you.</p>
<div class="flex gap-2 mt-4">
<input id="phrase" type="text" placeholder="e.g., 'dashboard' or 'a blog about cats'"
  class="rounded-md border border-gray-300 px-4 py-2 text-lg focus:outline-none focus:ring-2 focus:ring-blue-500">
<button id="generate"
  class="rounded-md bg-blue-600 text-white px-6 py-2 text-lg font-semibold hover:bg-blue-700 transition-colors">Generate</button>
</div>
<p class="text-sm text-gray-500">Or try one of these:</p>
<div class="flex gap-4">
<!--EXAMPLES-->
</div>
</main>
</div>
<script>
const input = document.getElementById('phrase');
const button = document.getElementById('generate');
function navigateToPhrase() {
  const phrase = input.value.trim();
  if (phrase) {
    window.location.href = '/' + encodeURIComponent(phrase);
  }
}
button.addEventListener('click', navigateToPhrase);
input.addEventListener('keydown', (e) => { if (e.key === 'Enter') navigateToPhrase(); });
</script>
</body>
</html>
"##;

/// Generated-page shell: runs the loading/error/ready flow around one
/// POST to /api/generate, then injects the returned fragment verbatim.
const PHRASE_HTML: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Generating&hellip;</title>
<script src="https://cdn.tailwindcss.com"></script>
</head>
<body>
<div id="status" class="flex items-center justify-center h-screen">Loading...</div>
<div id="content" class="container mx-auto p-4 hidden"></div>
<script>
const PHRASE = <!--PHRASE-->;
const statusEl = document.getElementById('status');
const contentEl = document.getElementById('content');
document.title = PHRASE;
async function generatePage() {
  try {
    const response = await fetch('/api/generate', {
      method: 'POST',
      headers: { 'Content-Type': 'application/json' },
      body: JSON.stringify({ phrase: PHRASE }),
    });
    if (!response.ok) {
      let message = 'Failed to generate page content.';
      try {
        const body = await response.json();
        if (body.error) message = body.error;
      } catch (_) {}
      throw new Error(message);
    }
    const data = await response.json();
    contentEl.innerHTML = data.code;
    statusEl.remove();
    contentEl.classList.remove('hidden');
  } catch (err) {
    statusEl.textContent = err instanceof Error ? err.message : 'An unknown error occurred.';
    statusEl.classList.add('text-red-500');
  }
}
generatePage();
</script>
</body>
</html>
"##;

/// Navigation target for a phrase: `/` plus the percent-encoded phrase.
/// Decoding the segment recovers the phrase exactly.
pub fn phrase_path(phrase: &str) -> String {
    format!("/{}", utf8_percent_encode(phrase, NON_ALPHANUMERIC))
}

pub fn index_page() -> String {
    let examples: Vec<String> = EXAMPLE_PHRASES
        .iter()
        .map(|phrase| {
            format!(
                r#"<a class="text-blue-600 hover:underline" href="{}">{}</a>"#,
                phrase_path(phrase),
                html_escape(phrase)
            )
        })
        .collect();
    INDEX_HTML.replace("<!--EXAMPLES-->", &examples.join("\n"))
}

pub fn phrase_page(phrase: &str) -> String {
    PHRASE_HTML.replace("<!--PHRASE-->", &js_string(phrase))
}

/// JSON-style string literal that is also safe to embed inside a <script>
/// element: angle brackets are unicode-escaped so a phrase containing
/// "</script>" cannot terminate the script early.
fn js_string(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for ch in value.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '<' => out.push_str("\\u003c"),
            '>' => out.push_str("\\u003e"),
            '&' => out.push_str("\\u0026"),
            c if (c as u32) < 0x20 => {
                out.push_str(&format!("\\u{:04x}", c as u32));
            }
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

fn html_escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}
