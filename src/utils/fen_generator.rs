//! GameState-to-FEN serializer.

use crate::game_state::chess_types::*;
use crate::utils::algebraic::square_to_algebraic;

pub fn generate_fen(game_state: &GameState) -> String {
    let mut out = String::with_capacity(90);

    for row in 0..8u8 {
        let mut empty = 0;
        for col in 0..8u8 {
            match game_state.board.piece_at(Square::at(row, col)) {
                None => empty += 1,
                Some(piece) => {
                    if empty > 0 {
                        out.push(char::from(b'0' + empty));
                        empty = 0;
                    }
                    out.push(piece_to_fen_char(piece));
                }
            }
        }
        if empty > 0 {
            out.push(char::from(b'0' + empty));
        }
        if row < 7 {
            out.push('/');
        }
    }

    out.push(' ');
    out.push(match game_state.side_to_move {
        Color::White => 'w',
        Color::Black => 'b',
    });

    out.push(' ');
    let rights = game_state.castling_rights;
    if rights == CastlingRights::NONE {
        out.push('-');
    } else {
        for (flag, ch) in [
            (rights.white_king_side, 'K'),
            (rights.white_queen_side, 'Q'),
            (rights.black_king_side, 'k'),
            (rights.black_queen_side, 'q'),
        ] {
            if flag {
                out.push(ch);
            }
        }
    }

    out.push(' ');
    match game_state.en_passant_square {
        Some(square) => out.push_str(&square_to_algebraic(square)),
        None => out.push('-'),
    }

    out.push_str(&format!(
        " {} {}",
        game_state.halfmove_clock, game_state.fullmove_number
    ));
    out
}

fn piece_to_fen_char(piece: Piece) -> char {
    let letter = piece.kind.letter();
    match piece.color {
        Color::White => letter.to_ascii_uppercase(),
        Color::Black => letter,
    }
}

#[cfg(test)]
mod tests {
    use super::generate_fen;
    use crate::game_state::chess_types::GameState;

    #[test]
    fn fen_survives_a_reload() {
        for fen in [
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
            "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
            "4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 2",
        ] {
            let game = GameState::from_fen(fen).expect("fen");
            assert_eq!(generate_fen(&game), fen);
        }
    }

    #[test]
    fn tracks_the_game_after_moves() {
        let mut game = GameState::new_game();
        let (mv, promo) = game.move_from_lan("e2e4").expect("legal");
        assert!(game.commit(mv, promo));
        assert_eq!(
            game.to_fen(),
            "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1"
        );
    }
}
