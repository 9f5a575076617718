use std::sync::mpsc::{self, Receiver, Sender};

use snake_controller::config::InitialState;
use snake_controller::game::{GameState, GameStatus};
use snake_controller::input::{Direction, GameInput};
use snake_controller::snake::Position;
use snake_controller::{Cell, ConfigurationError, Controller, ControllerError, Message};

struct Ports {
    display: Receiver<Message>,
    food: Receiver<Message>,
    score: Receiver<Message>,
}

fn controller(
    config: &str,
) -> (
    Controller<Sender<Message>, Sender<Message>, Sender<Message>>,
    Ports,
) {
    let (display_tx, display) = mpsc::channel();
    let (food_tx, food) = mpsc::channel();
    let (score_tx, score) = mpsc::channel();
    let controller =
        Controller::new(display_tx, food_tx, score_tx, config).expect("valid configuration");
    (
        controller,
        Ports {
            display,
            food,
            score,
        },
    )
}

fn drain(receiver: &Receiver<Message>) -> Vec<Message> {
    receiver.try_iter().collect()
}

#[test]
fn single_segment_snake_steps_right() {
    let (mut controller, ports) = controller("W 10 10 F 9 9 S R 1 5 5");

    controller.receive(Message::Timeout).expect("timeout accepted");

    let display = drain(&ports.display);
    assert_eq!(display.len(), 2);
    assert!(display.contains(&Message::display(Position::new(6, 5), Cell::Snake)));
    assert!(display.contains(&Message::display(Position::new(5, 5), Cell::Free)));
    assert!(drain(&ports.score).is_empty());
}

#[test]
fn food_response_on_the_snake_is_recorded_but_not_shown() {
    let (mut controller, ports) = controller("W 10 10 F 9 9 S R 1 5 5");

    controller
        .receive(Message::FoodResponse(Position::new(5, 5)))
        .expect("food response accepted");

    assert_eq!(drain(&ports.food), vec![Message::FoodRequest]);
    assert!(drain(&ports.display).is_empty());
    assert_eq!(controller.food(), Position::new(5, 5));
}

#[test]
fn stepping_off_the_left_edge_loses() {
    let (mut controller, ports) = controller("W 10 10 F 9 9 S L 1 0 0");

    controller.receive(Message::Timeout).expect("timeout accepted");

    assert_eq!(drain(&ports.score), vec![Message::Lost]);
    assert!(drain(&ports.display).is_empty());
}

#[test]
fn construction_string_sets_up_state() {
    let initial: InitialState = "W 10 10 F 1 1 S R 2 5 5 4 5"
        .parse()
        .expect("valid configuration");
    let (display_tx, _display) = mpsc::channel::<Message>();
    let (food_tx, _food) = mpsc::channel::<Message>();
    let (score_tx, _score) = mpsc::channel::<Message>();
    let controller = Controller::from_initial_state(display_tx, food_tx, score_tx, initial);

    assert_eq!(controller.bounds().width, 10);
    assert_eq!(controller.bounds().height, 10);
    assert_eq!(controller.food(), Position::new(1, 1));
    assert_eq!(controller.direction(), Direction::Right);
    let body: Vec<(Position, u32)> = controller
        .body()
        .segments()
        .map(|segment| (segment.position, segment.ttl))
        .collect();
    assert_eq!(
        body,
        vec![(Position::new(5, 5), 2), (Position::new(4, 5), 1)]
    );
}

#[test]
fn bad_configuration_yields_no_controller() {
    let (display_tx, _display) = mpsc::channel::<Message>();
    let (food_tx, _food) = mpsc::channel::<Message>();
    let (score_tx, _score) = mpsc::channel::<Message>();

    let result = Controller::new(display_tx, food_tx, score_tx, "W 10 10 F 1 1 S Z 1 5 5");

    assert!(matches!(result, Err(ConfigurationError::UnknownDirection(_))));
}

#[test]
fn unexpected_event_propagates() {
    let (mut controller, _ports) = controller("W 10 10 F 9 9 S R 1 5 5");

    assert_eq!(
        controller.receive(Message::FoodRequest),
        Err(ControllerError::UnexpectedEvent {
            kind: "food_request"
        })
    );
}

#[test]
fn stepwise_food_collection_and_wall_collision() {
    let initial: InitialState = "W 6 4 F 2 1 S R 1 1 1"
        .parse()
        .expect("valid configuration");
    let mut state = GameState::new(initial, Some(42));

    state.tick().expect("tick");
    assert_eq!(state.status, GameStatus::Playing);
    assert_eq!(state.score, 1);
    assert_eq!(state.controller().body().len(), 2);
    assert_eq!(state.controller().body().head().position, Position::new(2, 1));

    state
        .apply_input(GameInput::Direction(Direction::Up))
        .expect("turn");
    state.tick().expect("tick");
    assert_eq!(state.controller().body().head().position, Position::new(2, 0));
    assert_eq!(state.board.cell(Position::new(2, 0)), Some(Cell::Snake));

    state.tick().expect("tick");
    assert_eq!(state.status, GameStatus::GameOver);
}
