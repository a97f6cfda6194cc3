//! SVG board images. Works for any board, legal or not.

use shakmaty::{Board, Color, File, Piece, Rank, Role, Square};

const LIGHT: &str = "#f0d9b5";
const DARK: &str = "#b58863";
const MARGIN_RATIO: f32 = 0.05;

fn glyph(piece: Piece) -> char {
    match (piece.color, piece.role) {
        (Color::White, Role::King) => '\u{2654}',
        (Color::White, Role::Queen) => '\u{2655}',
        (Color::White, Role::Rook) => '\u{2656}',
        (Color::White, Role::Bishop) => '\u{2657}',
        (Color::White, Role::Knight) => '\u{2658}',
        (Color::White, Role::Pawn) => '\u{2659}',
        (Color::Black, Role::King) => '\u{265A}',
        (Color::Black, Role::Queen) => '\u{265B}',
        (Color::Black, Role::Rook) => '\u{265C}',
        (Color::Black, Role::Bishop) => '\u{265D}',
        (Color::Black, Role::Knight) => '\u{265E}',
        (Color::Black, Role::Pawn) => '\u{265F}',
    }
}

/// Render `board` as a square SVG of `size` pixels, with `orientation` at the bottom.
pub fn render_svg(board: &Board, orientation: Color, size: u32) -> String {
    let size = size.max(64) as f32;
    let margin = size * MARGIN_RATIO;
    let cell = (size - 2.0 * margin) / 8.0;

    let mut svg = String::new();
    svg.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{size}" height="{size}" viewBox="0 0 {size} {size}">"#
    ));
    svg.push_str(&format!(r##"<rect width="{size}" height="{size}" fill="#212121"/>"##));

    for rank_idx in 0..8u32 {
        for file_idx in 0..8u32 {
            let square = Square::from_coords(File::new(file_idx), Rank::new(rank_idx));
            let (col, row) = match orientation {
                Color::White => (file_idx, 7 - rank_idx),
                Color::Black => (7 - file_idx, rank_idx),
            };
            let x = margin + col as f32 * cell;
            let y = margin + row as f32 * cell;
            let fill = if (file_idx + rank_idx) % 2 == 0 { DARK } else { LIGHT };
            svg.push_str(&format!(
                r#"<rect x="{x:.1}" y="{y:.1}" width="{cell:.1}" height="{cell:.1}" fill="{fill}"/>"#
            ));

            if let Some(piece) = board.piece_at(square) {
                svg.push_str(&format!(
                    r#"<text x="{:.1}" y="{:.1}" font-size="{:.1}" text-anchor="middle" dominant-baseline="central">{}</text>"#,
                    x + cell / 2.0,
                    y + cell / 2.0,
                    cell * 0.8,
                    glyph(piece)
                ));
            }
        }
    }

    // Coordinates in the margin
    let label_size = margin * 0.7;
    for i in 0..8u32 {
        let (file_char, rank_char) = match orientation {
            Color::White => ((b'a' + i as u8) as char, (b'8' - i as u8) as char),
            Color::Black => ((b'h' - i as u8) as char, (b'1' + i as u8) as char),
        };
        let along = margin + (i as f32 + 0.5) * cell;
        svg.push_str(&format!(
            r##"<text x="{along:.1}" y="{:.1}" font-size="{label_size:.1}" fill="#e5e5e5" text-anchor="middle" dominant-baseline="central">{file_char}</text>"##,
            size - margin / 2.0
        ));
        svg.push_str(&format!(
            r##"<text x="{:.1}" y="{along:.1}" font-size="{label_size:.1}" fill="#e5e5e5" text-anchor="middle" dominant-baseline="central">{rank_char}</text>"##,
            margin / 2.0
        ));
    }

    svg.push_str("</svg>");
    svg
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_position_has_all_pieces() {
        let svg = render_svg(&Board::default(), Color::White, 400);
        assert!(svg.starts_with("<svg"));
        assert!(svg.ends_with("</svg>"));
        assert_eq!(svg.matches("<text").count(), 32 + 16);
        assert_eq!(svg.matches('\u{2654}').count(), 1);
        assert_eq!(svg.matches('\u{265F}').count(), 8);
    }

    #[test]
    fn test_empty_board_renders() {
        let svg = render_svg(&Board::empty(), Color::Black, 10);
        assert_eq!(svg.matches("<text").count(), 16);
        assert_eq!(svg.matches(r##"fill="#f0d9b5""##).count(), 32);
    }

    #[test]
    fn test_orientation_flips_squares_and_labels() {
        let mut board = Board::empty();
        board.set_piece_at(
            Square::A1,
            Piece {
                color: Color::White,
                role: Role::Rook,
            },
        );

        // 400px board: 20px margin, 45px cells, glyph centered in its cell
        let white = render_svg(&board, Color::White, 400);
        assert!(white.contains(r#"<text x="42.5" y="357.5" font-size="36.0""#));
        assert!(white.find(">a</text>").unwrap() < white.find(">h</text>").unwrap());
        assert!(white.find(">8</text>").unwrap() < white.find(">1</text>").unwrap());

        let black = render_svg(&board, Color::Black, 400);
        assert!(black.contains(r#"<text x="357.5" y="42.5" font-size="36.0""#));
        assert!(black.find(">h</text>").unwrap() < black.find(">a</text>").unwrap());
        assert!(black.find(">1</text>").unwrap() < black.find(">8</text>").unwrap());
    }
}
