use othello_agents::{Agent, AlphaBetaAgent};
use othello_core::{Cell, GameState, Player, Position};
use crossterm::{
    cursor::{Hide, MoveTo, Show},
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    style::{Color as TermColor, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal::{self, Clear, ClearType},
    ExecutableCommand,
};
use std::io::{self, Write};

pub struct InteractiveGame {
    initial: GameState,
    state: GameState,
    engine: AlphaBetaAgent,
    human: Player,
    cursor_pos: (i32, i32), // (row, col)
    message: String,
    history: Vec<GameState>,
}

impl InteractiveGame {
    pub fn new(state: GameState, depth: u8, human: Player) -> Self {
        let centre = state.size() as i32 / 2 - 1;
        Self {
            initial: state.clone(),
            state,
            engine: AlphaBetaAgent::new(depth),
            human,
            cursor_pos: (centre, centre),
            message: String::from("Use hjkl to move, Enter to place, q to quit"),
            history: Vec::new(),
        }
    }

    pub fn run(&mut self) -> io::Result<()> {
        // Setup terminal
        terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(Hide)?;
        stdout.execute(Clear(ClearType::All))?;

        let result = self.game_loop();

        // Cleanup
        stdout.execute(Show)?;
        terminal::disable_raw_mode()?;
        stdout.execute(Clear(ClearType::All))?;
        stdout.execute(MoveTo(0, 0))?;

        result
    }

    fn game_loop(&mut self) -> io::Result<()> {
        loop {
            if self.state.is_finished() {
                self.message = match self.state.winner() {
                    Some(player) if player == self.human => String::from("You win! (n=new, q=quit)"),
                    Some(_) => String::from("Engine wins! (n=new, q=quit)"),
                    None => String::from("Draw! (n=new, q=quit)"),
                };
            } else if self.state.player_in_turn() != self.human {
                self.engine_move()?;
                continue;
            } else if self.state.legal_moves().is_empty() {
                self.message = String::from("No legal moves: press p to pass");
            }

            self.draw_board()?;

            if let Event::Key(KeyEvent { code, kind, .. }) = event::read()? {
                if kind != KeyEventKind::Press {
                    continue;
                }
                match code {
                    KeyCode::Char('q') | KeyCode::Esc => break,
                    KeyCode::Char('h') | KeyCode::Left => self.move_cursor(0, -1),
                    KeyCode::Char('j') | KeyCode::Down => self.move_cursor(1, 0),
                    KeyCode::Char('k') | KeyCode::Up => self.move_cursor(-1, 0),
                    KeyCode::Char('l') | KeyCode::Right => self.move_cursor(0, 1),
                    KeyCode::Enter | KeyCode::Char(' ') => self.place_token(),
                    KeyCode::Char('p') => self.pass(),
                    KeyCode::Char('u') => self.undo_move(),
                    KeyCode::Char('n') => self.new_game(),
                    _ => {}
                }
            }
        }

        Ok(())
    }

    fn move_cursor(&mut self, dr: i32, dc: i32) {
        let size = self.state.size() as i32;
        let row = self.cursor_pos.0 + dr;
        let col = self.cursor_pos.1 + dc;

        if (0..size).contains(&row) && (0..size).contains(&col) {
            self.cursor_pos = (row, col);
        }
    }

    fn place_token(&mut self) {
        if self.state.is_finished() {
            return;
        }

        let pos = Position::new(self.cursor_pos.0, self.cursor_pos.1);
        let before = self.state.clone();
        match self.state.insert_token(pos) {
            Ok(()) => {
                self.history.push(before);
                self.message = format!("You played {pos}");
            }
            Err(err) => self.message = err.to_string(),
        }
    }

    fn pass(&mut self) {
        if self.state.is_finished() || !self.state.legal_moves().is_empty() {
            self.message = String::from("You cannot pass while a move is available");
            return;
        }
        self.history.push(self.state.clone());
        self.state.change_player();
        self.message = String::from("You passed");
    }

    fn engine_move(&mut self) -> io::Result<()> {
        self.message = String::from("Engine thinking...");
        self.draw_board()?;

        let before = self.state.clone();
        let mv = self.engine.decide_move(&mut self.state);
        if mv.is_none() {
            self.message = String::from("Engine passes");
            return Ok(());
        }

        match self.state.insert_token(mv) {
            Ok(()) => {
                let score = self.engine.last_result().map_or(0, |r| r.score);
                self.message = format!("Engine played {mv} (score {score})");
            }
            Err(err) => {
                self.state = before;
                self.message = format!("Engine error: {err}");
            }
        }

        Ok(())
    }

    fn undo_move(&mut self) {
        // Roll back to the last position where the human was to move.
        match self.history.pop() {
            Some(previous) => {
                self.state = previous;
                self.message = String::from("Undid last move");
            }
            None => self.message = String::from("Nothing to undo"),
        }
    }

    fn new_game(&mut self) {
        self.state = self.initial.clone();
        self.history.clear();
        let centre = self.state.size() as i32 / 2 - 1;
        self.cursor_pos = (centre, centre);
        self.message = String::from("New game started!");
    }

    fn draw_board(&self) -> io::Result<()> {
        let mut stdout = io::stdout();
        stdout.execute(MoveTo(0, 0))?;
        stdout.execute(Clear(ClearType::FromCursorDown))?;

        let size = self.state.size() as i32;
        let legal = if self.state.player_in_turn() == self.human {
            self.state.legal_moves()
        } else {
            Vec::new()
        };
        let files: String = (0..size).map(|c| format!("{} ", (b'a' + c as u8) as char)).collect();

        // Title
        println!("Othello - Interactive Mode (vim keys: hjkl)\r");
        println!("Commands: Enter=place, p=pass, u=undo, n=new, q=quit\r");
        println!("\r");

        println!("    {files}\r");
        for row in 0..size {
            print!("{:>2} ", row + 1);

            for col in 0..size {
                let pos = Position::new(row, col);
                let is_cursor = self.cursor_pos == (row, col);

                if is_cursor {
                    stdout.execute(SetBackgroundColor(TermColor::Yellow))?;
                } else if legal.contains(&pos) {
                    stdout.execute(SetBackgroundColor(TermColor::Blue))?;
                } else {
                    stdout.execute(SetBackgroundColor(TermColor::DarkGreen))?;
                }

                match self.state.board().get(pos).unwrap_or_default() {
                    Cell::Black => {
                        stdout.execute(SetForegroundColor(TermColor::Black))?;
                        print!(" ●");
                    }
                    Cell::White => {
                        stdout.execute(SetForegroundColor(TermColor::White))?;
                        print!(" ●");
                    }
                    Cell::Empty => print!("  "),
                }

                stdout.execute(ResetColor)?;
            }

            println!(" {}\r", row + 1);
        }
        println!("    {files}\r");
        println!("\r");

        // Game info
        let count = self.state.count_tokens();
        println!(
            "{} to move | Black {} - White {} | You are {}\r",
            self.state.player_in_turn(),
            count.black,
            count.white,
            self.human
        );

        // Status message
        println!("\r");
        println!("{}\r", self.message);

        stdout.flush()?;
        Ok(())
    }
}
