use std::time::Duration;

use iced::{
    keyboard::{self, Key, Modifiers},
    mouse,
    widget::{
        canvas::{self, Canvas, Frame, Geometry, Path, Stroke},
        container, mouse_area, stack, text,
    },
    Color, Element, Length, Point, Rectangle, Renderer, Size, Subscription, Task, Theme,
};

use crate::sim::{
    system::{Command, Simulation, Snapshot},
    units::{Float, Vector, DAY},
};

mod keybinds;

const FRAME_INTERVAL: Duration = Duration::from_micros(1_000_000 / 60);

#[derive(Debug, Clone)]
pub(crate) enum Message {
    Tick,
    Input(Command),
}

pub(crate) struct Gui {
    simulation: Simulation,
    snapshot: Snapshot,
}

pub(crate) fn run(simulation: Simulation, window_size: Float) -> iced::Result {
    let mut window_settings = iced::window::Settings::default();
    window_settings.size = Size::new(window_size as f32, window_size as f32);
    iced::application(Gui::title, Gui::update, Gui::view)
        .subscription(Gui::subscription)
        .antialiasing(true)
        .window(window_settings)
        .run_with(move || (Gui::new(simulation), Task::none()))
}

fn key_to_message(key: Key, _modifiers: Modifiers) -> Option<Message> {
    keybinds::command_for_key(&key).map(Message::Input)
}

impl Gui {
    fn new(simulation: Simulation) -> Self {
        let snapshot = simulation.snapshot();
        Gui {
            simulation,
            snapshot,
        }
    }

    fn title(&self) -> String {
        format!("Orbital modeller - {}", self.simulation.name())
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Tick => self.simulation.tick(),
            Message::Input(Command::Quit) => return iced::exit(),
            Message::Input(command) => self.simulation.apply(command),
        }
        self.snapshot = self.simulation.snapshot();
        Task::none()
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            iced::time::every(FRAME_INTERVAL).map(|_| Message::Tick),
            keyboard::on_key_press(key_to_message),
        ])
    }

    fn status_line(&self) -> String {
        let snapshot = &self.snapshot;
        let state = if snapshot.running {
            "Running"
        } else {
            "Paused, click to run"
        };
        let ramp = match snapshot.ramp_target {
            Some(target) => format!(" -> {:.2} days", target / DAY),
            None => String::new(),
        };
        format!(
            "{} | step {:.3} days{} | t = {:.0} days",
            state,
            snapshot.time_step / DAY,
            ramp,
            snapshot.elapsed / DAY
        )
    }

    fn view(&self) -> Element<'_, Message> {
        let orbits = Canvas::new(Orbits {
            snapshot: &self.snapshot,
        })
        .width(Length::Fill)
        .height(Length::Fill);
        let status = container(text(self.status_line()).size(14).color(Color::WHITE)).padding(8);

        mouse_area(stack![orbits, status])
            .on_press(Message::Input(Command::ToggleRun))
            .into()
    }
}

/// Draws a snapshot, reading nothing else.
struct Orbits<'a> {
    snapshot: &'a Snapshot,
}

fn to_point(v: &Vector) -> Point {
    Point::new(v.x as f32, v.y as f32)
}

impl<'a> canvas::Program<Message> for Orbits<'a> {
    type State = ();

    fn draw(
        &self,
        _state: &(),
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        frame.fill_rectangle(Point::ORIGIN, bounds.size(), Color::BLACK);

        for body in &self.snapshot.bodies {
            let [r, g, b] = body.appearance.color;
            let color = Color::from_rgb8(r, g, b);
            frame.fill(
                &Path::circle(
                    to_point(&body.display_position),
                    body.appearance.radius() as f32,
                ),
                color,
            );

            // a polyline needs at least two points
            if self.snapshot.draw_trail && body.trail.len() > 1 {
                let trail = Path::new(|builder| {
                    let mut points = body.trail.iter().map(to_point);
                    if let Some(first) = points.next() {
                        builder.move_to(first);
                    }
                    for point in points {
                        builder.line_to(point);
                    }
                });
                frame.stroke(
                    &trail,
                    Stroke::default()
                        .with_color(color)
                        .with_width(body.appearance.trail_width() as f32),
                );
            }
        }

        vec![frame.into_geometry()]
    }
}
