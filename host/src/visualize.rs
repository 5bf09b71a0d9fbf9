// ASCII rendering of the player's guesses so far.
//
// Only what the player already knows is drawn: hits as `X`, misses as `o`,
// every untried cell as `.`. Target positions are never revealed.

use std::io::{self, Write};

use startup_core::{Codec, Outcome};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mark {
    Hit,
    Miss,
}

#[derive(Debug, Clone)]
pub struct GuessBoard {
    codec: Codec,
    marks: Vec<Option<Mark>>,
}

impl GuessBoard {
    pub fn new(codec: Codec) -> Self {
        Self { codec, marks: vec![None; codec.size()] }
    }

    /// Remember the outcome of a guess. Labels that are not on the board are
    /// ignored and `false` is returned.
    ///
    /// A later miss on an already hit cell keeps the hit marker.
    pub fn record(&mut self, label: &str, outcome: Outcome) -> bool {
        let Ok(index) = self.codec.decode(label) else {
            return false;
        };
        let mark = &mut self.marks[index];
        match outcome {
            Outcome::Hit | Outcome::Destroyed => *mark = Some(Mark::Hit),
            Outcome::Miss => {
                if mark.is_none() {
                    *mark = Some(Mark::Miss);
                }
            }
        }
        true
    }

    pub fn mark(&self, label: &str) -> Option<Mark> {
        self.codec.decode(label).ok().and_then(|index| self.marks[index])
    }

    pub fn render(&self) -> String {
        let width = self.codec.width();
        let mut out = String::from("   ");
        for letter in self.codec.alphabet().chars() {
            out.push_str(&format!(" {letter} "));
        }
        out.push('\n');

        for (row, cells) in self.marks.chunks(width).enumerate() {
            out.push_str(&format!("{row:2} "));
            for cell in cells {
                let ch = match cell {
                    Some(Mark::Hit) => 'X',
                    Some(Mark::Miss) => 'o',
                    None => '.',
                };
                out.push_str(&format!(" {ch} "));
            }
            out.push('\n');
        }
        out
    }
}

/// Write the board to `out`.
pub fn display_board<W: Write>(board: &GuessBoard, out: &mut W) -> io::Result<()> {
    out.write_all(board.render().as_bytes())
}
