//! Server-side HTML rendering.

use connect_four::{Cell, Difficulty, GameSnapshot, Mode, Player};
use strum::IntoEnumIterator;

/// Escapes text for use inside HTML elements and attribute values.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
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

/// Human-readable text for a move error code carried in `?error=`.
pub fn notice(code: &str) -> Option<&'static str> {
    match code {
        "invalid_column" => Some("That column does not exist."),
        "column_full" => Some("That column is full, pick another one."),
        "game_over" => Some("The game is over. Start a new one!"),
        "awaiting_computer" => Some("Hold on, the computer is still playing."),
        _ => None,
    }
}

fn page(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{title}</title>\n<link rel=\"stylesheet\" href=\"/static/style.css\">\n\
         <script src=\"/static/script.js\" defer></script>\n</head>\n<body>\n{body}</body>\n</html>\n"
    )
}

/// Start page: player names, mode and difficulty.
pub fn start_page() -> String {
    let difficulties: String = Difficulty::iter()
        .map(|difficulty| {
            let selected = if difficulty == Difficulty::default() {
                " selected"
            } else {
                ""
            };
            format!(
                "<option value=\"{difficulty}\"{selected}>{}</option>\n",
                difficulty.label()
            )
        })
        .collect();

    let modes: String = Mode::iter()
        .map(|mode| {
            let checked = if mode == Mode::default() { " checked" } else { "" };
            let label = match mode {
                Mode::Human => "Two players",
                Mode::Ai => "Against the computer",
            };
            format!(
                "<label><input type=\"radio\" name=\"mode\" value=\"{mode}\"{checked}> {label}</label>\n"
            )
        })
        .collect();

    let body = format!(
        "<h1>Connect Four</h1>\n\
         <form method=\"post\" action=\"/start\" class=\"start\">\n\
         <label>Red player <input type=\"text\" name=\"player1\" maxlength=\"32\" placeholder=\"Red\"></label>\n\
         <label>Yellow player <input type=\"text\" name=\"player2\" maxlength=\"32\" placeholder=\"Yellow\"></label>\n\
         <fieldset>\n<legend>Mode</legend>\n{modes}</fieldset>\n\
         <label>Difficulty <select name=\"difficulty\">\n{difficulties}</select></label>\n\
         <button type=\"submit\">Start</button>\n</form>\n"
    );
    page("Connect Four", &body)
}

fn player_label(snapshot: &GameSnapshot, player: Player) -> String {
    format!(
        "<span class=\"player {player}\">{} ({})</span>",
        escape(snapshot.name(player)),
        player.title()
    )
}

/// One line describing whose turn it is or how the game ended.
pub fn status_line(snapshot: &GameSnapshot) -> String {
    if let Some(player) = snapshot.winner() {
        format!(
            "<span class=\"winner\">{} wins!</span>",
            player_label(snapshot, player)
        )
    } else if snapshot.is_draw() {
        "<span class=\"winner draw\">It's a draw!</span>".to_string()
    } else {
        format!("{} to play", player_label(snapshot, snapshot.current))
    }
}

/// Game page: status, optional notice and the board.
///
/// Each column is a form posting its index to `/play`; columns that cannot
/// take a token are rendered disabled.
pub fn game_page(snapshot: &GameSnapshot, notice_code: Option<&str>) -> String {
    let mut body = String::from("<h1>Connect Four</h1>\n");
    body.push_str(&format!(
        "<p class=\"players\">{} vs {}</p>\n",
        player_label(snapshot, Player::Red),
        player_label(snapshot, Player::Yellow)
    ));
    body.push_str(&format!(
        "<p class=\"status\">{}</p>\n",
        status_line(snapshot)
    ));
    if let Some(text) = notice_code.and_then(notice) {
        body.push_str(&format!("<p class=\"notice\">{text}</p>\n"));
    }

    body.push_str(&format!(
        "<div class=\"board\" data-rows=\"{}\" data-cols=\"{}\">\n",
        snapshot.rows, snapshot.cols
    ));
    for col in 0..snapshot.cols {
        let disabled = if snapshot.is_playable(col) {
            ""
        } else {
            " disabled"
        };
        body.push_str(&format!(
            "<form method=\"post\" action=\"/play\" class=\"column\">\
             <button type=\"submit\" name=\"col\" value=\"{col}\"{disabled}>\n"
        ));
        for row in &snapshot.cells {
            let cell = row.get(col).copied().unwrap_or(Cell::Empty);
            body.push_str(&format!(
                "<span class=\"cell {}\"></span>\n",
                cell.label()
            ));
        }
        body.push_str("</button></form>\n");
    }
    body.push_str("</div>\n");

    body.push_str(&format!(
        "<p class=\"meta\">{} &middot; {} moves</p>\n",
        snapshot.difficulty.label(),
        snapshot.moves
    ));
    body.push_str(
        "<form method=\"post\" action=\"/reset\"><button type=\"submit\">New game</button></form>\n",
    );
    page("Connect Four", &body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use connect_four::{Game, GameSettings, GameStatus};

    #[test]
    fn test_escape_markup() {
        assert_eq!(
            escape("<b>\"Tom\" & 'Jerry'</b>"),
            "&lt;b&gt;&quot;Tom&quot; &amp; &#39;Jerry&#39;&lt;/b&gt;"
        );
    }

    #[test]
    fn test_unknown_notice_is_ignored() {
        assert_eq!(notice("nope"), None);
        assert!(notice("column_full").is_some());
    }

    #[test]
    fn test_game_page_renders_every_cell() {
        let mut game = Game::new(GameSettings::default());
        game.play(0).unwrap();
        let html = game_page(&game.snapshot(), None);
        assert_eq!(html.matches("class=\"cell ").count(), 42);
        assert_eq!(html.matches("class=\"cell red\"").count(), 1);
        assert_eq!(html.matches("<form method=\"post\" action=\"/play\"").count(), 7);
        assert!(html.contains("Yellow (Yellow)</span> to play"));
    }

    #[test]
    fn test_names_are_escaped() {
        let game = Game::new(GameSettings {
            red_name: Some("<script>".to_string()),
            ..GameSettings::default()
        });
        let html = game_page(&game.snapshot(), Some("column_full"));
        assert!(!html.contains("<script> (Red)"));
        assert!(html.contains("&lt;script&gt; (Red)"));
        assert!(html.contains("class=\"notice\""));
    }

    #[test]
    fn test_finished_game_disables_columns() {
        let mut game = Game::new(GameSettings::default());
        for col in [0, 1, 0, 1, 0, 1, 0] {
            game.play(col).unwrap();
        }
        let html = game_page(&game.snapshot(), None);
        assert_eq!(html.matches(" disabled>").count(), 7);
        assert!(html.contains("class=\"winner\""));
    }

    #[test]
    fn test_status_line_reports_draw() {
        let mut snapshot = Game::new(GameSettings::default()).snapshot();
        snapshot.status = GameStatus::Draw;
        let line = status_line(&snapshot);
        assert!(line.contains("It's a draw!"));
        assert!(!line.contains("to play"));
    }

    #[test]
    fn test_start_page_lists_presets() {
        let html = start_page();
        assert_eq!(html.matches("<option value=").count(), 3);
        assert!(html.contains("<option value=\"easy\" selected>"));
        assert_eq!(html.matches("type=\"radio\" name=\"mode\"").count(), 2);
        assert!(html.contains("value=\"human\" checked>"));
    }
}
