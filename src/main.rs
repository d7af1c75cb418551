use race_cars::config::RaceConfig;
use race_cars::messages::Response;
use race_cars::race::{
    Board, Card, CarId, Car, Color, Deck, DeckRng, GameState, Icon, Icons, Player, PlayerError,
    Space, MAX_GEAR,
};
use tracing::{info, warn, Level};

const RACERS: [(&str, Color); 3] = [
    ("Ada", Color::Red),
    ("Grace", Color::Blue),
    ("Linus", Color::Green),
];

fn speed_card(speed: i32, icons: Icons) -> Card {
    Card::new(format!("Speed {}", speed), speed, icons, true, true, true)
}

fn starting_deck() -> Vec<Card> {
    let mut cards = Vec::new();
    for speed in 1..=4 {
        for _ in 0..3 {
            cards.push(speed_card(speed, Icons::new()));
        }
    }
    cards.push(Card::new("Speed 0".to_string(), 0, Icons::from([(Icon::Cooling, 1)]), true, true, true));
    cards.push(Card::new("Speed 5".to_string(), 5, Icons::from([(Icon::Boost, 1)]), true, true, false));
    cards.push(Card::stress());
    cards.push(Card::stress());
    cards.push(Card::heat());
    cards
}

fn track(config: &RaceConfig) -> Vec<Space> {
    (0..config.track_length)
        .map(|i| {
            let corner = config
                .corners
                .iter()
                .position(|&c| c == i)
                .map_or(0, |n| n as u32 + 1);
            Space::new(corner, i == 0)
        })
        .collect()
}

fn new_game(config: &RaceConfig) -> anyhow::Result<GameState<DeckRng>> {
    anyhow::ensure!(
        config.track_length >= RACERS.len(),
        "a track of {} spaces cannot hold {} cars",
        config.track_length,
        RACERS.len()
    );
    let mut rng = match config.seed {
        Some(seed) => DeckRng::seeded(seed),
        None => DeckRng::default(),
    };
    let mut board = Board::new(track(config), config.laps);
    let mut players = Vec::new();
    // Grid positions count back from the finish line, two cars to a space.
    for (i, (name, color)) in RACERS.iter().enumerate() {
        let id = CarId(i as u32);
        let grid = config.track_length - 1 - i / 2;
        board.place_car(id, grid)?;
        let mut deck = Deck::new(starting_deck());
        deck.shuffle(&mut rng);
        players.push(Player::new(name.to_string(), Car::new(id, *color, config.engine), deck));
    }
    Ok(GameState::new(board, players, rng))
}

fn take_turn(game: &mut GameState<DeckRng>, car: CarId, config: &RaceConfig) -> anyhow::Result<()> {
    game.refill_hand(car, config.hand_size);
    let Some(player) = game.player_mut(car) else {
        return Ok(());
    };

    let gear = (player.car().gear() + 1).min(MAX_GEAR);
    if let Err(err) = player.shift_gear(gear) {
        warn!("{} stays in gear: {}", player.name(), err);
    }
    // One card per gear, first playable card each time.
    for _ in 0..player.car().gear() {
        let Some(idx) = player.hand().cards().iter().position(Card::is_playable) else {
            break;
        };
        player.play_card(idx)?;
    }

    let speed = match game.resolve_turn(car) {
        Some(Ok(speed)) => speed,
        Some(Err(PlayerError::NoBasicCardAvailable)) => {
            // Unresolved cards would otherwise fail again next turn.
            if let Some(player) = game.player_mut(car) {
                warn!("{} cannot resolve Stress, played cards are discarded", player.name());
                player.discard_played_cards();
            }
            0
        }
        Some(Err(err)) => return Err(err.into()),
        None => return Ok(()),
    };
    advance(game, car, speed)
}

// Moves the car forward by `speed` spaces, stopping short of full spaces,
// and records the corners and finish line it crosses.
fn advance(game: &mut GameState<DeckRng>, car: CarId, speed: i32) -> anyhow::Result<()> {
    let board = game.board_mut();
    let Some(from) = board.position_of(car) else {
        return Ok(());
    };
    let len = board.len();
    let steps = (speed.max(0) as usize).min(len - 1);
    let mut to = (from + steps) % len;
    while to != from && board.space(to)?.is_full() {
        to = board.previous_index(to)?;
    }
    board.move_car(car, from, to)?;
    let crossed: Vec<(u32, bool)> = (1..=(to + len - from) % len)
        .map(|step| {
            let space = &board.spaces()[(from + step) % len];
            (space.corner(), space.is_finish_line())
        })
        .collect();

    let Some(player) = game.player_mut(car) else {
        return Ok(());
    };
    for (corner, finish_line) in crossed {
        if finish_line {
            player.car_mut().increase_lap();
            player.car_mut().reset_passed_corners();
        }
        if corner > 0 {
            player.car_mut().add_passed_corner(corner);
        }
    }
    info!(
        "{} moved from space {} to {} on lap {}",
        player.name(),
        from,
        to,
        player.car().lap()
    );
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let config = RaceConfig::from_env()?;

    let file_appender = tracing_appender::rolling::daily(&config.log_dir, "race.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    let subscriber = tracing_subscriber::fmt()
        .json()
        .with_max_level(Level::DEBUG)
        .with_writer(non_blocking)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    info!("loaded config: {:?}", config);

    let mut game = new_game(&config)?;
    let mut rounds = 0;
    while rounds < config.max_rounds && !game.is_over() {
        game.start_round();
        while let Some(car) = game.next_racer() {
            take_turn(&mut game, car, &config)?;
        }
        rounds += 1;
    }
    info!("race ended after {} rounds", rounds);

    let response = Response::ok_with_message(
        game.standings(),
        format!("race ended after {} rounds", rounds),
    );
    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}
