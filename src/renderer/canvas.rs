//! Arena canvas

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style, Stylize};
use ratatui::symbols::Marker;
use ratatui::text::Line;
use ratatui::widgets::Block;
use ratatui::widgets::canvas::{Canvas, Circle, Context, Line as Segment, Rectangle};

use crate::view::{Label, LabelSize, PaddleView, SessionView};

const BACKGROUND: Color = Color::Rgb(26, 26, 26);
const ACCENT: Color = Color::Rgb(102, 205, 170);
const TEXT: Color = Color::White;

/// Centre line dashes, top to bottom
const DASH_LENGTH: f64 = 30.0;
const DASH_GAP: f64 = 10.0;
const DASH_COUNT: usize = 15;

const BALL_RADIUS: f64 = 8.0;

/// Draw one frame of the arena into the whole frame area
pub fn draw(frame: &mut Frame, view: &SessionView) {
    let area = frame.area();
    frame.render_widget(arena_canvas(view, area), area);
}

fn arena_canvas(view: &SessionView, area: Rect) -> Canvas<'_, impl Fn(&mut Context) + '_> {
    let half_w = f64::from(view.half_extents.x);
    let half_h = f64::from(view.half_extents.y);
    // Arena units per terminal column, for centring text
    let cell_width = 2.0 * half_w / f64::from(area.width.saturating_sub(2).max(1));

    Canvas::default()
        .block(Block::bordered().title(" Paddle Duel ").border_style(Style::new().fg(ACCENT)))
        .background_color(BACKGROUND)
        .marker(Marker::Braille)
        .x_bounds([-half_w, half_w])
        .y_bounds([-half_h, half_h])
        .paint(move |ctx| {
            draw_center_line(ctx, half_h);
            ctx.layer();

            draw_paddle(ctx, &view.left_paddle);
            draw_paddle(ctx, &view.right_paddle);
            ctx.draw(&Circle {
                x: f64::from(view.ball.x),
                y: f64::from(view.ball.y),
                radius: BALL_RADIUS,
                color: TEXT,
            });
            ctx.layer();

            for label in &view.labels {
                let (x, y) = label_origin(label, cell_width);
                ctx.print(x, y, styled_label(label));
            }
        })
}

fn draw_center_line(ctx: &mut Context, half_h: f64) {
    let mut y = half_h;
    for _ in 0..DASH_COUNT {
        let end = (y - DASH_LENGTH).max(-half_h);
        ctx.draw(&Segment {
            x1: 0.0,
            y1: y,
            x2: 0.0,
            y2: end,
            color: ACCENT,
        });
        y = end - DASH_GAP;
        if y <= -half_h {
            break;
        }
    }
}

fn draw_paddle(ctx: &mut Context, paddle: &PaddleView) {
    let half = paddle.size / 2.0;
    ctx.draw(&Rectangle {
        x: f64::from(paddle.center.x - half.x),
        y: f64::from(paddle.center.y - half.y),
        width: f64::from(paddle.size.x),
        height: f64::from(paddle.size.y),
        color: ACCENT,
    });
}

/// Left edge and baseline that centre `label` on its position
pub(crate) fn label_origin(label: &Label, cell_width: f64) -> (f64, f64) {
    let width = label.text.chars().count() as f64 * cell_width;
    (f64::from(label.pos.x) - width / 2.0, f64::from(label.pos.y))
}

fn styled_label(label: &Label) -> Line<'static> {
    let line = Line::styled(label.text.clone(), Style::new().fg(TEXT));
    match label.size {
        LabelSize::Large => line.bold(),
        LabelSize::Medium => line.bold().fg(ACCENT),
        LabelSize::Small => line,
    }
}
