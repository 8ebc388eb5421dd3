//! FEN-to-GameState parser.
//!
//! Builds a complete game state from a Forsyth-Edwards Notation string,
//! including rights, clocks and the check/terminal flags of the side to move.

use crate::errors::ChessError;
use crate::game_state::chess_rules::STARTING_POSITION_FEN;
use crate::game_state::chess_types::*;
use crate::utils::algebraic::algebraic_to_square;

fn fen_error(msg: impl Into<String>) -> ChessError {
    ChessError::InvalidFen(msg.into())
}

pub fn parse_fen(fen: &str) -> Result<GameState, ChessError> {
    let mut parts = fen.split_whitespace();

    let board_part = parts.next().ok_or_else(|| fen_error("missing board layout"))?;
    let side_part = parts.next().ok_or_else(|| fen_error("missing side to move"))?;
    let castling_part = parts.next().ok_or_else(|| fen_error("missing castling rights"))?;
    let en_passant_part = parts.next().ok_or_else(|| fen_error("missing en-passant square"))?;
    let halfmove_part = parts.next().ok_or_else(|| fen_error("missing halfmove clock"))?;
    let fullmove_part = parts.next().ok_or_else(|| fen_error("missing fullmove number"))?;

    if parts.next().is_some() {
        return Err(fen_error("extra trailing fields"));
    }

    let mut game_state = GameState::new_empty();

    game_state.board = parse_board(board_part)?;
    game_state.side_to_move = parse_side_to_move(side_part)?;
    game_state.castling_rights = parse_castling_rights(castling_part)?;
    game_state.en_passant_square = parse_en_passant_square(en_passant_part)?;
    game_state.halfmove_clock = halfmove_part
        .parse::<u16>()
        .map_err(|_| fen_error(format!("invalid halfmove clock: {halfmove_part}")))?;
    game_state.fullmove_number = fullmove_part
        .parse::<u16>()
        .map_err(|_| fen_error(format!("invalid fullmove number: {fullmove_part}")))?;

    game_state.from_initial_position =
        fen.split_whitespace().collect::<Vec<_>>().join(" ") == STARTING_POSITION_FEN;
    game_state.refresh_status();

    Ok(game_state)
}

fn parse_board(board_part: &str) -> Result<Board, ChessError> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err(fen_error("board layout must contain 8 ranks"));
    }

    let mut board = Board::empty();
    let mut kings = [0usize; 2];

    for (row, rank_str) in ranks.iter().enumerate() {
        let mut col = 0usize;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(fen_error(format!("invalid empty-square count '{ch}'")));
                }
                col += empty_count as usize;
                continue;
            }

            let kind = PieceKind::from_letter(ch)
                .ok_or_else(|| fen_error(format!("invalid piece character '{ch}'")))?;
            let color = if ch.is_ascii_uppercase() {
                Color::White
            } else {
                Color::Black
            };
            let square = Square::new(row as u8, col as u8)
                .ok_or_else(|| fen_error(format!("rank {} overflows", 8 - row)))?;

            if kind == PieceKind::King {
                kings[color.index()] += 1;
            }
            board.set(square, Some(Piece::new(color, kind)));
            col += 1;
        }

        if col != 8 {
            return Err(fen_error(format!("rank {} does not cover 8 files", 8 - row)));
        }
    }

    if kings.iter().any(|&count| count > 1) {
        return Err(fen_error("more than one king for a side"));
    }

    Ok(board)
}

fn parse_side_to_move(side_part: &str) -> Result<Color, ChessError> {
    match side_part {
        "w" => Ok(Color::White),
        "b" => Ok(Color::Black),
        _ => Err(fen_error(format!("invalid side to move: {side_part}"))),
    }
}

fn parse_castling_rights(castling_part: &str) -> Result<CastlingRights, ChessError> {
    let mut rights = CastlingRights::NONE;
    if castling_part == "-" {
        return Ok(rights);
    }

    for ch in castling_part.chars() {
        match ch {
            'K' => rights.white_king_side = true,
            'Q' => rights.white_queen_side = true,
            'k' => rights.black_king_side = true,
            'q' => rights.black_queen_side = true,
            _ => return Err(fen_error(format!("invalid castling character '{ch}'"))),
        }
    }
    Ok(rights)
}

fn parse_en_passant_square(en_passant_part: &str) -> Result<Option<Square>, ChessError> {
    if en_passant_part == "-" {
        return Ok(None);
    }
    let square = algebraic_to_square(en_passant_part)?;
    let on_passed_rank = square.row() == Color::White.en_passant_capture_row()
        || square.row() == Color::Black.en_passant_capture_row();
    if !on_passed_rank {
        return Err(fen_error(format!(
            "en-passant square {en_passant_part} is not on rank 3 or 6"
        )));
    }
    Ok(Some(square))
}

#[cfg(test)]
mod tests {
    use super::parse_fen;
    use crate::game_state::chess_types::*;
    use crate::utils::render_game_state::render_game_state;

    #[test]
    fn parses_start_position() {
        let game_state = parse_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1")
            .expect("FEN should parse");
        assert_eq!(game_state, GameState::new_game());
        assert!(game_state.from_initial_position());
        println!("\n{}", render_game_state(&game_state));
    }

    #[test]
    fn detects_terminal_positions_on_load() {
        let mated = parse_fen("R5k1/5ppp/8/8/8/8/8/6K1 b - - 0 1").expect("fen");
        assert!(mated.in_check());
        assert_eq!(mated.game_result(), GameResult::WhiteWinsByCheckmate);
        assert!(!mated.from_initial_position());
    }

    #[test]
    fn rejects_malformed_input() {
        assert!(parse_fen("8/8/8/8/8/8/8 w - - 0 1").is_err());
        assert!(parse_fen("9/8/8/8/8/8/8/8 w - - 0 1").is_err());
        assert!(parse_fen("8/8/8/8/8/8/8/8 x - - 0 1").is_err());
        assert!(parse_fen("8/8/8/8/8/8/8/8 w X - 0 1").is_err());
        assert!(parse_fen("8/8/8/8/8/8/8/8 w - e4 0 1").is_err());
        assert!(parse_fen("8/8/8/8/8/8/8/8 w - - 0").is_err());
        assert!(parse_fen("kk6/8/8/8/8/8/8/7K w - - 0 1").is_err());
        assert!(parse_fen("ppppppppp/8/8/8/8/8/8/8 w - - 0 1").is_err());
    }
}
