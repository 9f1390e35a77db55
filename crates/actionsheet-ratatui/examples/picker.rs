use std::cell::Cell;
use std::io::{stdout, Stdout};
use std::rc::Rc;
use std::time::{Duration, Instant};

use crossterm::{
    event::{
        poll,
        read,
        DisableMouseCapture,
        EnableMouseCapture,
        Event,
        KeyCode,
        KeyEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen},
};

use ratatui::{
    backend::CrosstermBackend,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Text},
    widgets::Paragraph,
    Terminal,
};

use actionsheet_ratatui::{
    actionsheet::{
        style::{Color as SheetColor, Font, Image},
        ActionItem,
        Phase,
    },
    ActionSheetState,
    ActionSheetView,
};

const CHOICES: [&str; 3] = ["Take Photo", "Choose From Library", "Cancel"];
const CANCEL: usize = 99;

struct Picker {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    sheet: Option<ActionSheetState>,
    choice: Rc<Cell<Option<usize>>>,
    status: String,
}

impl Picker {
    pub fn new() -> Result<Self, std::io::Error> {
        crossterm::terminal::enable_raw_mode()?;

        let mut stdout = stdout();

        crossterm::execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        Ok(Picker {
            terminal,
            sheet: None,
            choice: Rc::new(Cell::new(None)),
            status: String::from("Nothing picked yet."),
        })
    }

    fn open(&mut self) -> Result<(), std::io::Error> {
        let items = vec![
            ActionItem::new(CHOICES[0]).with_image(Image::symbol("◉")),
            ActionItem::new(CHOICES[1]).with_image(Image::symbol("▤")),
            ActionItem::new(CHOICES[2])
                .with_tag(CANCEL)
                .with_font(Font::system(14.0).bold())
                .with_font_color(SheetColor::rgb(200, 0, 0)),
        ];

        let mut sheet = ActionSheetState::from_items(items);
        let choice = self.choice.clone();
        sheet.on_select(move |tag| choice.set(Some(tag)));

        let size = self.terminal.size()?;
        let window = Rect::new(0, 0, size.width, size.height);

        if let Err(e) = sheet.show(window, window, Instant::now()) {
            self.status = format!("Could not show the sheet: {e}");
            return Ok(());
        }

        self.sheet = Some(sheet);

        Ok(())
    }

    pub fn run(&mut self) -> Result<(), std::io::Error> {
        self.terminal.clear()?;

        loop {
            let now = Instant::now();

            let closed = self.sheet.as_mut().map_or(false, |s| s.tick(now) == Phase::Dismissed);

            if closed {
                self.sheet = None;
            }

            if let Some(tag) = self.choice.take() {
                self.status = match tag {
                    CANCEL => String::from("Cancelled."),
                    tag => format!("Picked {:?}.", CHOICES[tag]),
                };
            }

            self.redraw()?;

            if !poll(Duration::from_millis(16))? {
                continue;
            }

            let event = read()?;

            if let Some(sheet) = &mut self.sheet {
                sheet.handle_event(&event, Instant::now());
                continue;
            }

            match event {
                Event::Key(ke) if ke.kind == KeyEventKind::Press => {
                    match ke.code {
                        KeyCode::Char('s') => self.open()?,
                        KeyCode::Char('q') => break,
                        _ => {},
                    }
                },
                _ => {
                    // Nothing else to do outside of the sheet.
                },
            }
        }

        crossterm::terminal::disable_raw_mode()?;
        execute!(self.terminal.backend_mut(), DisableMouseCapture, LeaveAlternateScreen)?;
        self.terminal.show_cursor()?;

        return Ok(());
    }

    fn redraw(&mut self) -> Result<(), std::io::Error> {
        let Picker { terminal, sheet, status, .. } = self;

        terminal.draw(|f| {
            let area = f.area();
            let text = Text::from(vec![
                Line::from("Press 's' to open the sheet, or 'q' to quit."),
                Line::from("Click a row or use the arrow keys and Enter to pick one."),
                Line::from("Esc closes the sheet without picking anything."),
                Line::from(""),
                Line::from(status.as_str()),
            ]);
            let style = Style::default().fg(Color::White).bg(Color::Blue);

            f.render_widget(Paragraph::new(text).style(style), area);

            if let Some(sheet) = sheet {
                f.render_stateful_widget(ActionSheetView::new(), area, sheet);
            }
        })?;

        Ok(())
    }
}

fn main() -> Result<(), std::io::Error> {
    let mut picker = Picker::new()?;

    return picker.run();
}
