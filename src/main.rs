use nannou::color::{Rgb8, rgb8};
use nannou::event::MouseButton;
use nannou::geom::{Point2, Rect, pt2};
use snakes_and_ladders::game::board::{GRID_SIZE, LAST_CELL};
use snakes_and_ladders::game::{BoardTopology, Die, MoveOutcome, PlayerColor, Session, Severity};

/// Animation frames of random faces before the roll result is delivered.
const ROLL_FRAMES: u8 = 10;

/// How long a banner stays up, in frames (~3s at 60fps).
const ALERT_FRAMES: u32 = 180;

const PANEL_WIDTH: f32 = 320.0;

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    nannou::app(model).update(update).run();
}

struct Model {
    session: Session,
    state: State,
    picked_count: usize,
    die_face: u8,
    alert: Option<Alert>,
}

enum State {
    Setup,
    AwaitRoll,
    Rolling(u8),
    Finished,
}

struct Alert {
    severity: Severity,
    text: String,
    frames_left: u32,
}

fn model(app: &nannou::App) -> Model {
    app.new_window()
        .title("Snakes and Ladders")
        .view(view)
        .mouse_pressed(mouse_pressed)
        .build()
        .unwrap();

    let mut session = Session::new();
    session.configure(2).unwrap();

    Model {
        session,
        state: State::Setup,
        picked_count: 2,
        die_face: 1,
        alert: None,
    }
}

fn update(_app: &nannou::App, model: &mut Model, _update: nannou::event::Update) {
    if let Some(alert) = &mut model.alert {
        alert.frames_left = alert.frames_left.saturating_sub(1);
    }
    if model.alert.as_ref().is_some_and(|a| a.frames_left == 0) {
        model.alert = None;
    }

    if let State::Rolling(n) = model.state {
        model.die_face = Die::roll().value();
        if n + 1 >= ROLL_FRAMES {
            deliver_roll(model);
        } else {
            model.state = State::Rolling(n + 1);
        }
    }
}

/// The dice animation has finished: hand the final face to the session and
/// turn the outcome into a banner and the next UI state.
fn deliver_roll(model: &mut Model) {
    let value = model.die_face;
    let roller = model
        .session
        .state()
        .current_player()
        .map(|p| p.name)
        .unwrap_or("?");

    let outcome = model
        .session
        .deliver_roll(value)
        .expect("die faces are within 1..=6");

    match outcome {
        Some(outcome) => {
            if let Some(severity) = outcome.severity() {
                model.alert = Some(Alert {
                    severity,
                    text: outcome.banner(roller).unwrap_or_default(),
                    frames_left: ALERT_FRAMES,
                });
            }
            model.state = match outcome {
                MoveOutcome::Win { .. } => State::Finished,
                _ => State::AwaitRoll,
            };
        }
        None => model.state = State::AwaitRoll,
    }
}

fn mouse_pressed(app: &nannou::App, model: &mut Model, button: MouseButton) {
    if button != MouseButton::Left {
        return;
    }
    let pos = app.mouse.position();
    let layout = Layout::new(app.window_rect());

    match model.state {
        State::Setup => {
            for (i, rect) in layout.count_buttons.iter().enumerate() {
                if rect.contains(pos) {
                    let count = i + 2;
                    model.picked_count = count;
                    model
                        .session
                        .configure(count)
                        .expect("picker only offers 2-4 seats");
                    return;
                }
            }
            if layout.start_button.contains(pos) {
                model
                    .session
                    .start()
                    .expect("setup always configures a roster");
                model.state = State::AwaitRoll;
            }
        }
        State::AwaitRoll => {
            if layout.dice_button.contains(pos) {
                if model.session.begin_roll() {
                    model.state = State::Rolling(0);
                }
            } else if layout.reset_button.contains(pos) {
                model.session.reset();
                model.alert = None;
                model.state = State::Setup;
            }
        }
        // Clicks while the dice tumbles are dropped, never queued.
        State::Rolling(_) => (),
        State::Finished => {
            if layout.again_button.contains(pos) {
                model.session.restart().expect("roster survives reset");
                model.alert = None;
                model.state = State::AwaitRoll;
            } else if layout.reset_button.contains(pos) {
                model.session.reset();
                model.alert = None;
                model.state = State::Setup;
            }
        }
    }
}

/// Screen regions, derived from the window rect every frame so resizing
/// only rescales coordinates and never touches game state.
struct Layout {
    board: Rect,
    panel: Rect,
    setup_card: Rect,
    count_buttons: [Rect; 3],
    start_button: Rect,
    dice_button: Rect,
    reset_button: Rect,
    again_button: Rect,
}

impl Layout {
    fn new(win: Rect) -> Self {
        let panel = Rect::from_w_h(PANEL_WIDTH, win.h())
            .shift_x(win.right() - PANEL_WIDTH / 2.0)
            .shift_y(win.y());

        let board_w = win.w() - PANEL_WIDTH;
        let side = (board_w.min(win.h()) - 40.0).max(100.0);
        let board = Rect::from_w_h(side, side)
            .shift_x(win.left() + board_w / 2.0)
            .shift_y(win.y());

        let setup_card = Rect::from_w_h(460.0, 380.0)
            .shift_x(win.x())
            .shift_y(win.y());

        let count_buttons = [0, 1, 2].map(|i| {
            Rect::from_w_h(130.0, 48.0)
                .shift_x(setup_card.x() + (i as f32 - 1.0) * 145.0)
                .shift_y(setup_card.y() + 50.0)
        });
        let start_button = Rect::from_w_h(380.0, 52.0)
            .shift_x(setup_card.x())
            .shift_y(setup_card.bottom() + 50.0);

        let dice_button = Rect::from_w_h(80.0, 80.0)
            .shift_x(panel.x())
            .shift_y(panel.y() - 20.0);
        let reset_button = Rect::from_w_h(220.0, 44.0)
            .shift_x(panel.x())
            .shift_y(panel.bottom() + 50.0);
        let again_button = Rect::from_w_h(220.0, 44.0)
            .shift_x(panel.x())
            .shift_y(panel.bottom() + 110.0);

        Layout {
            board,
            panel,
            setup_card,
            count_buttons,
            start_button,
            dice_button,
            reset_button,
            again_button,
        }
    }

    fn cell_size(&self) -> f32 {
        self.board.w() / GRID_SIZE as f32
    }

    fn cell_center(&self, cell: u8) -> Point2 {
        let (col, row) = BoardTopology::coordinates_of(cell).expect("cell on board");
        let size = self.cell_size();
        pt2(
            self.board.left() + (col as f32 + 0.5) * size,
            self.board.top() - (row as f32 + 0.5) * size,
        )
    }
}

// The board's amber palette, matching the classic wooden look.
const BG: (u8, u8, u8) = (120, 53, 15);
const CELL_LIGHT: (u8, u8, u8) = (253, 230, 138);
const CELL_DARK: (u8, u8, u8) = (252, 211, 77);
const FRAME: (u8, u8, u8) = (146, 64, 14);
const BUTTON: (u8, u8, u8) = (217, 119, 6);
const CARD: (u8, u8, u8) = (254, 243, 199);
const TEXT_DARK: (u8, u8, u8) = (120, 53, 15);
const LADDER: (u8, u8, u8) = (139, 69, 19);
const SNAKE_A: (u8, u8, u8) = (255, 0, 0);
const SNAKE_B: (u8, u8, u8) = (148, 0, 211);

fn tint((r, g, b): (u8, u8, u8)) -> Rgb8 {
    rgb8(r, g, b)
}

fn severity_color(severity: Severity) -> Rgb8 {
    match severity {
        Severity::Success => rgb8(34, 197, 94),
        Severity::Error => rgb8(239, 68, 68),
        Severity::Warning => rgb8(234, 179, 8),
        Severity::Info => rgb8(59, 130, 246),
    }
}

fn token_color(color: PlayerColor) -> Rgb8 {
    match color {
        PlayerColor::Red => rgb8(229, 57, 53),
        PlayerColor::Yellow => rgb8(253, 216, 53),
        PlayerColor::Blue => rgb8(30, 136, 229),
        PlayerColor::Green => rgb8(67, 160, 71),
    }
}

fn view(app: &nannou::App, model: &Model, frame: nannou::frame::Frame) {
    let draw = app.draw();
    draw.background().color(tint(BG));

    let layout = Layout::new(app.window_rect());

    match model.state {
        State::Setup => draw_setup(&draw, model, &layout),
        _ => {
            draw_board(&draw, &layout);
            draw_jumps(&draw, model, &layout);
            draw_tokens(&draw, model, &layout);
            draw_panel(&draw, model, &layout);
        }
    }

    if let Some(alert) = &model.alert {
        draw_alert(&draw, alert, app.window_rect());
    }

    draw.to_frame(app, &frame).unwrap();
}

fn draw_setup(draw: &nannou::Draw, model: &Model, layout: &Layout) {
    let card = layout.setup_card;
    draw.rect()
        .x_y(card.x(), card.y())
        .w_h(card.w(), card.h())
        .color(tint(CARD));

    draw.text("Snakes and Ladders")
        .x_y(card.x(), card.top() - 40.0)
        .w(card.w() - 40.0)
        .font_size(28)
        .color(tint(TEXT_DARK));

    draw.text("Select number of players")
        .x_y(card.x(), card.y() + 95.0)
        .w(card.w() - 40.0)
        .font_size(16)
        .color(tint(TEXT_DARK));

    for (i, rect) in layout.count_buttons.iter().enumerate() {
        let count = i + 2;
        let color = if count == model.picked_count {
            BUTTON
        } else {
            CELL_DARK
        };
        draw_button(draw, *rect, &format!("{count} Players"), tint(color));
    }

    // Roster preview for the picked seat count.
    let mut y = layout.count_buttons[0].bottom() - 40.0;
    for player in model.session.players() {
        draw.ellipse()
            .x_y(card.x() - 70.0, y)
            .w_h(18.0, 18.0)
            .color(token_color(player.color));
        draw.text(player.name)
            .x_y(card.x(), y)
            .w(100.0)
            .font_size(16)
            .color(tint(TEXT_DARK));
        y -= 28.0;
    }

    draw_button(draw, layout.start_button, "Start Game", tint(BUTTON));
}

fn draw_board(draw: &nannou::Draw, layout: &Layout) {
    let board = layout.board;
    let size = layout.cell_size();

    draw.rect()
        .x_y(board.x(), board.y())
        .w_h(board.w() + 16.0, board.h() + 16.0)
        .color(tint(FRAME));

    for cell in 1..=LAST_CELL {
        let (col, row) = BoardTopology::coordinates_of(cell).expect("cell on board");
        let center = layout.cell_center(cell);
        let color = if (col + row) % 2 == 0 {
            CELL_LIGHT
        } else {
            CELL_DARK
        };
        draw.rect()
            .x_y(center.x, center.y)
            .w_h(size - 1.0, size - 1.0)
            .color(tint(color));
        draw.text(&cell.to_string())
            .x_y(center.x, center.y + size * 0.28)
            .font_size((size * 0.26) as u32)
            .color(tint(TEXT_DARK));
    }
}

/// Every configured pair is drawn: ladders as twin rails with rungs and
/// snakes as wavy strokes between entry and exit.
fn draw_jumps(draw: &nannou::Draw, model: &Model, layout: &Layout) {
    let board = model.session.state().board();
    let size = layout.cell_size();

    for (entry, exit) in board.ladders() {
        let from = layout.cell_center(entry);
        let to = layout.cell_center(exit);
        let dir = (to - from).normalize_or_zero();
        let perp = pt2(-dir.y, dir.x) * size * 0.12;

        for side in [-1.0, 1.0] {
            draw.line()
                .start(from + perp * side)
                .end(to + perp * side)
                .weight(4.0)
                .color(tint(LADDER));
        }
        let rungs = ((to - from).length() / (size * 0.5)).max(2.0) as u32;
        for i in 1..rungs {
            let t = i as f32 / rungs as f32;
            let at = from.lerp(to, t);
            draw.line()
                .start(at - perp)
                .end(at + perp)
                .weight(3.0)
                .color(tint(LADDER));
        }
    }

    for (i, (entry, exit)) in board.snakes().enumerate() {
        let from = layout.cell_center(entry);
        let to = layout.cell_center(exit);
        let dir = (to - from).normalize_or_zero();
        let perp = pt2(-dir.y, dir.x);
        let amp = size * 0.3;

        let points: Vec<Point2> = (0..=24)
            .map(|step| {
                let t = step as f32 / 24.0;
                from.lerp(to, t) + perp * amp * (t * std::f32::consts::PI * 3.0).sin()
            })
            .collect();
        let color = tint(if i % 2 == 0 { SNAKE_A } else { SNAKE_B });
        draw.polyline().weight(5.0).points(points).color(color);
        // Head marker on the entry cell.
        draw.ellipse()
            .x_y(from.x, from.y)
            .w_h(size * 0.25, size * 0.25)
            .color(color);
    }
}

fn draw_tokens(draw: &nannou::Draw, model: &Model, layout: &Layout) {
    let size = layout.cell_size();
    // Per-seat nudge so tokens sharing a cell stay visible.
    let offsets = [
        pt2(-1.0, -1.0),
        pt2(1.0, -1.0),
        pt2(-1.0, 1.0),
        pt2(1.0, 1.0),
    ];

    for player in model.session.players() {
        let center = layout.cell_center(player.position) + offsets[player.id] * size * 0.18;
        draw.ellipse()
            .x_y(center.x, center.y)
            .w_h(size * 0.42, size * 0.42)
            .stroke(nannou::color::WHITE)
            .stroke_weight(2.0)
            .color(token_color(player.color));
    }
}

fn draw_panel(draw: &nannou::Draw, model: &Model, layout: &Layout) {
    let panel = layout.panel;
    let state = model.session.state();

    draw.rect()
        .x_y(panel.x(), panel.y())
        .w_h(panel.w(), panel.h())
        .color(tint(FRAME));

    let mut y = panel.top() - 50.0;
    let x = panel.x();

    draw.text("Snakes and Ladders")
        .x_y(x, y)
        .w(panel.w() - 20.0)
        .font_size(22)
        .color(nannou::color::WHITE);

    y -= 50.0;

    for player in state.players() {
        let active = player.id == state.current_index() && !state.game_over();
        if active {
            draw.rect()
                .x_y(x, y)
                .w_h(panel.w() - 40.0, 30.0)
                .color(tint(BUTTON));
        }
        draw.ellipse()
            .x_y(x - 100.0, y)
            .w_h(16.0, 16.0)
            .color(token_color(player.color));
        draw.text(&format!("{} - cell {}", player.name, player.position))
            .x_y(x + 10.0, y)
            .w(panel.w() - 80.0)
            .font_size(15)
            .color(nannou::color::WHITE);
        y -= 36.0;
    }

    y -= 20.0;

    if let Some(roll) = state.last_roll() {
        draw.text(&format!("Last roll: {roll}"))
            .x_y(x, y)
            .w(panel.w() - 20.0)
            .font_size(15)
            .color(nannou::color::WHITE);
    }

    y -= 30.0;

    let scoreboard = model.session.scoreboard();
    draw.text(&format!(
        "Score: {}   Wins: {}",
        scoreboard.score(),
        scoreboard.wins()
    ))
    .x_y(x, y)
    .w(panel.w() - 20.0)
    .font_size(15)
    .color(nannou::color::WHITE);

    match model.state {
        State::Finished => {
            if let Some(winner) = state.winner() {
                draw.text(&format!("{} won!", winner.name))
                    .x_y(x, layout.dice_button.y())
                    .w(panel.w() - 20.0)
                    .font_size(24)
                    .color(token_color(winner.color));
            }
            draw_button(draw, layout.again_button, "Play Again", tint(BUTTON));
            draw_button(draw, layout.reset_button, "Reset", tint(CELL_DARK));
        }
        _ => {
            let rolling = matches!(model.state, State::Rolling(_));
            draw_die(draw, layout.dice_button, model.die_face, rolling);
            draw.text(if rolling { "Rolling..." } else { "Roll" })
                .x_y(x, layout.dice_button.bottom() - 20.0)
                .font_size(14)
                .color(nannou::color::WHITE);
            draw_button(draw, layout.reset_button, "Reset", tint(CELL_DARK));
        }
    }
}

fn draw_die(draw: &nannou::Draw, rect: Rect, value: u8, rolling: bool) {
    let face = if rolling {
        rgb8(255, 255, 230)
    } else {
        rgb8(255, 255, 255)
    };
    draw.rect()
        .x_y(rect.x(), rect.y())
        .w_h(rect.w(), rect.h())
        .color(face);

    let p = rect.w() / 4.0;
    let mut pips: Vec<Point2> = Vec::new();
    if value % 2 == 1 {
        pips.push(pt2(0.0, 0.0));
    }
    if value >= 2 {
        pips.push(pt2(-p, p));
        pips.push(pt2(p, -p));
    }
    if value >= 4 {
        pips.push(pt2(p, p));
        pips.push(pt2(-p, -p));
    }
    if value == 6 {
        pips.push(pt2(-p, 0.0));
        pips.push(pt2(p, 0.0));
    }
    for pip in pips {
        draw.ellipse()
            .x_y(rect.x() + pip.x, rect.y() + pip.y)
            .w_h(rect.w() * 0.16, rect.w() * 0.16)
            .color(nannou::color::BLACK);
    }
}

fn draw_button(draw: &nannou::Draw, rect: Rect, label: &str, color: Rgb8) {
    draw.rect()
        .x_y(rect.x(), rect.y())
        .w_h(rect.w(), rect.h())
        .color(color);
    draw.text(label)
        .x_y(rect.x(), rect.y())
        .w(rect.w() - 10.0)
        .font_size(16)
        .color(nannou::color::WHITE);
}

fn draw_alert(draw: &nannou::Draw, alert: &Alert, win: Rect) {
    let rect = Rect::from_w_h(560.0, 44.0)
        .shift_x(win.x())
        .shift_y(win.top() - 40.0);
    draw.rect()
        .x_y(rect.x(), rect.y())
        .w_h(rect.w(), rect.h())
        .color(severity_color(alert.severity));
    draw.text(&alert.text)
        .x_y(rect.x(), rect.y())
        .w(rect.w() - 20.0)
        .font_size(16)
        .color(nannou::color::WHITE);
}
