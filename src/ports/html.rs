// src/ports/html.rs
use crate::domain::{Emoji, FormDraft, Note, NoteList};
use html_escape::{encode_double_quoted_attribute, encode_text};
use tracing::instrument;

/// Renders the guestbook as a standalone HTML page.
#[derive(Debug, Default)]
pub struct HtmlPresenter;

impl HtmlPresenter {
    pub fn new() -> Self {
        Self
    }

    fn render_card(&self, note: &Note) -> String {
        format!(
            r#"        <div class="card" id="note-{id}">
            <div class="card-head">
                <span class="emoji">{emoji}</span>
                <span class="note-id">#{id}</span>
            </div>
            <p class="content">{content}</p>
            <div class="author"><span>by {nickname}</span></div>
        </div>
"#,
            id = note.id,
            emoji = note.emoji,
            content = encode_text(&note.content),
            nickname = encode_text(&note.nickname),
        )
    }

    fn render_form(&self, draft: &FormDraft) -> String {
        let options: String = Emoji::ALL
            .iter()
            .map(|emoji| {
                let selected = if *emoji == draft.emoji { " selected" } else { "" };
                format!("<option{selected}>{emoji}</option>")
            })
            .collect();

        format!(
            r#"    <div class="panel">
        <form class="draft">
            <select name="emoji" disabled>{options}</select>
            <input type="text" name="nickname" placeholder="Nickname" value="{nickname}" disabled>
            <input type="text" name="content" placeholder="Leave a message!" value="{content}" disabled>
        </form>
        <p class="hint">Post with <code>wavenote post</code> or <code>wavenote session</code>.</p>
    </div>
"#,
            options = options,
            nickname = encode_double_quoted_attribute(&draft.nickname),
            content = encode_double_quoted_attribute(&draft.content),
        )
    }

    #[instrument(level = "debug", skip_all, fields(notes = notes.len()))]
    pub fn render(&self, notes: &NoteList, draft: &FormDraft) -> String {
        let cards: String = if notes.is_empty() {
            "        <p class=\"empty\">No notes yet. Be the first to leave one!</p>\n".to_string()
        } else {
            notes.iter().map(|note| self.render_card(note)).collect()
        };

        format!(
            r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    <title>WaveNote</title>
    <style>
        body {{
            font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
            min-height: 100vh;
            margin: 0;
            padding: 2rem;
            color: #1f2937;
            background: linear-gradient(135deg, #38bdf8, #6366f1);
        }}
        .container {{
            max-width: 56rem;
            margin: 0 auto;
        }}
        header {{
            text-align: center;
            margin-bottom: 2.5rem;
            color: white;
        }}
        header h1 {{
            font-size: 3rem;
            margin-bottom: 0.5rem;
        }}
        .panel {{
            background: rgba(255, 255, 255, 0.8);
            border-radius: 1rem;
            padding: 1.5rem;
            margin-bottom: 2.5rem;
        }}
        .draft {{
            display: flex;
            gap: 1rem;
        }}
        .draft input, .draft select {{
            padding: 0.75rem;
            border-radius: 0.75rem;
            border: 1px solid #e5e7eb;
        }}
        .hint {{
            font-size: 0.8em;
            color: #6b7280;
        }}
        .notes {{
            display: grid;
            grid-template-columns: repeat(auto-fill, minmax(16rem, 1fr));
            gap: 1.5rem;
        }}
        .card {{
            background: rgba(255, 255, 255, 0.9);
            border-radius: 1rem;
            padding: 1.5rem;
            box-shadow: 0 4px 8px rgba(0, 0, 0, 0.1);
        }}
        .card-head {{
            display: flex;
            justify-content: space-between;
        }}
        .emoji {{
            font-size: 2.25rem;
        }}
        .note-id {{
            font-size: 0.75em;
            color: #9ca3af;
        }}
        .content {{
            font-size: 1.1em;
            overflow-wrap: break-word;
        }}
        .author {{
            text-align: right;
            font-weight: bold;
            color: #3b82f6;
        }}
        .empty {{
            color: white;
        }}
    </style>
</head>
<body>
    <div class="container">
    <header>
        <h1>🌊 WaveNote</h1>
        <p>Guestbook</p>
    </header>
{form}    <div class="notes">
{cards}    </div>
    </div>
</body>
</html>"#,
            form = self.render_form(draft),
            cards = cards,
        )
    }
}
