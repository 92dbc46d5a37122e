//! Integration tests for the client against a scripted server.
//!
//! The mock server listens on localhost, records every request line it
//! receives and answers queries through a responder closure, the way the
//! server-side mod would.

use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use blockwire::prelude::*;
use blockwire::protocol::{ProtocolError, SEPARATOR};
use blockwire::{PlayerId, SlotEmpty};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::TcpListener;
use tokio::sync::mpsc;

// =========================================================================
// Mock server
// =========================================================================

#[derive(Debug, PartialEq)]
enum Event {
    /// A request line, split on the separator, tagged with its connection.
    Line(usize, Vec<String>),
    /// The client closed the connection.
    Closed(usize),
}

type Responder = Arc<dyn Fn(&[String]) -> Option<String> + Send + Sync>;

struct MockServer {
    port: u16,
    events: mpsc::UnboundedReceiver<Event>,
}

impl MockServer {
    /// Starts a server that answers a request when `respond` returns
    /// `Some` and stays silent otherwise.
    async fn start(
        respond: impl Fn(&[String]) -> Option<String> + Send + Sync + 'static,
    ) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        let (tx, events) = mpsc::unbounded_channel();
        let respond: Responder = Arc::new(respond);

        tokio::spawn(async move {
            let mut next_conn = 0;
            while let Ok((socket, _)) = listener.accept().await {
                next_conn += 1;
                let conn = next_conn;
                let tx = tx.clone();
                let respond = Arc::clone(&respond);

                tokio::spawn(async move {
                    let (reader, mut writer) = socket.into_split();
                    let mut lines = BufReader::new(reader).lines();
                    while let Ok(Some(line)) = lines.next_line().await {
                        let fields: Vec<String> =
                            line.split(SEPARATOR).map(str::to_string).collect();
                        let reply = respond(&fields);
                        let _ = tx.send(Event::Line(conn, fields));
                        if let Some(reply) = reply {
                            let reply = format!("{reply}\n");
                            if writer.write_all(reply.as_bytes()).await.is_err() {
                                break;
                            }
                        }
                    }
                    let _ = tx.send(Event::Closed(conn));
                });
            }
        });

        Self { port, events }
    }

    async fn client(&self) -> Client {
        self.client_with(ConnectConfig::default()).await
    }

    async fn client_with(&self, config: ConnectConfig) -> Client {
        let client = Client::new();
        client
            .connect("127.0.0.1", self.port, config)
            .await
            .expect("should connect to mock server");
        client
    }

    async fn next_event(&mut self) -> Event {
        tokio::time::timeout(Duration::from_secs(2), self.events.recv())
            .await
            .expect("timed out waiting for the server")
            .expect("server task stopped")
    }

    async fn next_line(&mut self) -> Vec<String> {
        match self.next_event().await {
            Event::Line(_, fields) => fields,
            other => panic!("expected a request line, got {other:?}"),
        }
    }

    /// Asserts the server has received nothing new.
    async fn assert_quiet(&mut self) {
        tokio::time::sleep(Duration::from_millis(100)).await;
        if let Ok(event) = self.events.try_recv() {
            panic!("expected no traffic, got {event:?}");
        }
    }
}

fn line(parts: &[&str]) -> Vec<String> {
    parts.iter().map(|p| p.to_string()).collect()
}

fn wire(fields: &[&str]) -> String {
    fields.join(&SEPARATOR.to_string())
}

fn player_wire(id: &str, name: &str, health: f64) -> String {
    let health = health.to_string();
    wire(&[
        id, name, "10", "64", "-20", "90", "STONE", "false", "20", &health,
        "20", "5", "0", "0",
    ])
}

/// Answers `getPlayer <id>` with a player named after the id.
fn players(fields: &[String]) -> Option<String> {
    match fields[0].as_str() {
        "getPlayer" => Some(player_wire(&fields[1], &format!("player-{}", fields[1]), 20.0)),
        _ => None,
    }
}

// =========================================================================
// Players
// =========================================================================

#[tokio::test]
async fn test_mutate_then_reread_sends_edit_then_query() {
    let health = Arc::new(Mutex::new(20.0_f64));
    let state = Arc::clone(&health);
    let mut server = MockServer::start(move |fields| match fields[0].as_str() {
        "setPlayerStat" => {
            *state.lock().unwrap() = fields[3].parse().unwrap();
            None
        }
        "getPlayer" => Some(player_wire(&fields[1], "Steve", *state.lock().unwrap())),
        _ => None,
    })
    .await;
    let client = server.client().await;

    let player = client.get_player(7).await.unwrap();
    assert_eq!(server.next_line().await, line(&["getPlayer", "7"]));
    assert_eq!(player.id, PlayerId(7));
    assert_eq!(player.health, 20.0);

    let updated = client.set_player_health(&player, 15.0).await.unwrap();
    assert_eq!(
        server.next_line().await,
        line(&["setPlayerStat", "HEALTH", "7", "15"])
    );
    assert_eq!(server.next_line().await, line(&["getPlayer", "7"]));
    server.assert_quiet().await;

    assert_eq!(updated.health, 15.0);
    // The snapshot passed in is not updated.
    assert_eq!(player.health, 20.0);
}

#[tokio::test]
async fn test_rotation_out_of_range_sends_nothing() {
    let mut server = MockServer::start(players).await;
    let client = server.client().await;
    let player = client.get_player(0).await.unwrap();
    server.next_line().await;

    for rotation in [181, -181] {
        let err = client
            .set_player_position(&player, 1, 2, 3, Some(rotation), Dimension::World)
            .await
            .unwrap_err();
        assert!(matches!(err, BlockwireError::Validation(_)), "{rotation}: {err:?}");
    }
    server.assert_quiet().await;

    for rotation in [180, -180] {
        client
            .set_player_position(&player, 1, 2, 3, Some(rotation), Dimension::World)
            .await
            .unwrap();
        assert_eq!(
            server.next_line().await,
            line(&[
                "setPlayerPos",
                "0",
                "1",
                "2",
                "3",
                "world",
                &format!("rotation:{rotation}"),
            ])
        );
        assert_eq!(server.next_line().await, line(&["getPlayer", "0"]));
    }
}

#[tokio::test]
async fn test_position_without_rotation() {
    let mut server = MockServer::start(players).await;
    let client = server.client().await;
    let player = client.get_player(1).await.unwrap();
    server.next_line().await;

    client
        .set_player_position(&player, -5, 70, 12, None, Dimension::Nether)
        .await
        .unwrap();
    assert_eq!(
        server.next_line().await,
        line(&["setPlayerPos", "1", "-5", "70", "12", "world_nether"])
    );
}

#[tokio::test]
async fn test_hunger_with_saturation_sends_both_stats() {
    let mut server = MockServer::start(players).await;
    let client = server.client().await;
    let player = client.get_player(2).await.unwrap();
    server.next_line().await;

    client.set_player_hunger(&player, 18.0, Some(4.5)).await.unwrap();
    assert_eq!(
        server.next_line().await,
        line(&["setPlayerStat", "FOOD_LEVEL", "2", "18"])
    );
    assert_eq!(
        server.next_line().await,
        line(&["setPlayerStat", "SATURATION", "2", "4.5"])
    );
    assert_eq!(server.next_line().await, line(&["getPlayer", "2"]));
}

#[tokio::test]
async fn test_velocity_line() {
    let mut server = MockServer::start(players).await;
    let client = server.client().await;
    let player = client.get_player(0).await.unwrap();
    server.next_line().await;

    client
        .set_player_velocity(&player, Direction::Up, 2.5)
        .await
        .unwrap();
    assert_eq!(
        server.next_line().await,
        line(&["setPlayerVelocity", "UP", "0", "2.5"])
    );
    assert_eq!(server.next_line().await, line(&["getPlayer", "0"]));
}

// =========================================================================
// World, chat, titles
// =========================================================================

#[tokio::test]
async fn test_unknown_block_decodes_to_sentinel() {
    let mut server = MockServer::start(|fields| {
        (fields[0] == "getBlock").then(|| "future_block_42".to_string())
    })
    .await;
    let client = server.client().await;

    let block = client.get_block(1, 64, -3, Dimension::World).await.unwrap();
    assert_eq!(
        server.next_line().await,
        line(&["getBlock", "1", "64", "-3", "world"])
    );
    assert_eq!(block.kind, MaterialType::Unknown("FUTURE_BLOCK_42".into()));
    assert_eq!((block.x, block.y, block.z), (Some(1), Some(64), Some(-3)));
}

#[tokio::test]
async fn test_set_block_is_fire_and_forget() {
    let mut server = MockServer::start(|_| None).await;
    let client = server.client().await;

    client
        .set_block(0, 64, 0, Material::GoldBlock, Dimension::End)
        .await
        .unwrap();
    assert_eq!(
        server.next_line().await,
        line(&["setBlock", "0", "64", "0", "world_the_end", "GOLD_BLOCK"])
    );
}

#[tokio::test]
async fn test_set_block_accepts_uncatalogued_material() {
    let mut server = MockServer::start(|_| None).await;
    let client = server.client().await;

    client
        .set_block(
            2,
            70,
            -8,
            MaterialType::Unknown("CHERRY_LOG".into()),
            Dimension::World,
        )
        .await
        .unwrap();
    assert_eq!(
        server.next_line().await,
        line(&["setBlock", "2", "70", "-8", "world", "CHERRY_LOG"])
    );
}

#[tokio::test]
async fn test_chat_round_trip() {
    let mut server = MockServer::start(|fields| {
        (fields[0] == "pollChat")
            .then(|| format!("Alex:hi{SEPARATOR}Steve:time: 12:30"))
    })
    .await;
    let client = server.client().await;

    client.post_chat("hello: world; bye").await.unwrap();
    assert_eq!(
        server.next_line().await,
        line(&["postChat", "hello: world; bye"])
    );

    let messages = client.poll_chat().await.unwrap();
    assert_eq!(server.next_line().await, line(&["pollChat"]));
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0].sender_name, "Alex");
    assert_eq!(messages[1].text, "time: 12:30");
}

#[tokio::test]
async fn test_empty_chat_poll() {
    let server = MockServer::start(|_| Some(String::new())).await;
    let client = server.client().await;
    assert!(client.poll_chat().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_separator_in_argument_is_rejected_before_sending() {
    let mut server = MockServer::start(|_| None).await;
    let client = server.client().await;

    let err = client
        .post_chat(&format!("a{SEPARATOR}b"))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        BlockwireError::Protocol(ProtocolError::IllegalArgument(_))
    ));
    let err = client.post_chat("two\nlines").await.unwrap_err();
    assert!(matches!(err, BlockwireError::Protocol(_)));
    server.assert_quiet().await;
}

#[tokio::test]
async fn test_show_title_converts_seconds_to_ticks() {
    let mut server = MockServer::start(|_| None).await;
    let client = server.client().await;

    client
        .show_title("Hello", &TitleOptions::default())
        .await
        .unwrap();
    assert_eq!(
        server.next_line().await,
        line(&["showTitle", "-1", "Hello", "", "20", "100", "20"])
    );

    let options = TitleOptions::default()
        .subtitle("sub")
        .player(0)
        .timing(0.52, 2.0, 0.04);
    client.show_title("Hi", &options).await.unwrap();
    assert_eq!(
        server.next_line().await,
        line(&["showTitle", "0", "Hi", "sub", "10", "40", "0"])
    );
}

#[tokio::test]
async fn test_run_command_with_leading_slash_is_still_sent() {
    let mut server = MockServer::start(|_| None).await;
    let client = server.client().await;

    client.run_command("/time set day").await.unwrap();
    assert_eq!(
        server.next_line().await,
        line(&["chatCommand", "/time set day"])
    );
}

#[tokio::test]
async fn test_validate_id() {
    let mut server = MockServer::start(|fields| {
        let known = fields[1] == "MATERIAL" && fields[2] == "STONE";
        Some(if known { "Yes" } else { "No" }.to_string())
    })
    .await;
    let client = server.client().await;

    assert!(client.validate_id(IdKind::Material, "STONE").await.unwrap());
    assert_eq!(
        server.next_line().await,
        line(&["validate", "MATERIAL", "STONE"])
    );
    assert!(!client.validate_id(IdKind::Entity, "UNICORN").await.unwrap());
}

// =========================================================================
// Inventory
// =========================================================================

#[tokio::test]
async fn test_give_item_returns_inventory() {
    let mut server = MockServer::start(|fields| match fields[0].as_str() {
        "getPlayer" => players(fields),
        "getInv" => Some(format!("0:DIAMOND_SWORD;Excalibur:1{SEPARATOR}4:STONE:64")),
        _ => None,
    })
    .await;
    let client = server.client().await;
    let player = client.get_player(0).await.unwrap();
    server.next_line().await;

    let options = GiveOptions::default().name("Excalibur").slot(0);
    let inventory = client
        .give_item(&player, Material::DiamondSword, 1, &options)
        .await
        .unwrap();
    assert_eq!(
        server.next_line().await,
        line(&["addInv", "0", "DIAMOND_SWORD", "1", "name:Excalibur", "slot:0"])
    );
    assert_eq!(server.next_line().await, line(&["getInv", "0"]));

    assert_eq!(inventory.len(), 2);
    let sword = inventory.get(0).unwrap();
    assert_eq!(sword.item.kind, Material::DiamondSword);
    assert_eq!(sword.item.display_name.as_deref(), Some("Excalibur"));
    assert_eq!(sword.amount, 1);
    let stone = inventory.get(4).unwrap();
    assert_eq!(stone.item.kind, Material::Stone);
    assert_eq!(stone.item.display_name, None);
    assert_eq!(stone.amount, 64);

    let err: BlockwireError = inventory.get(1).unwrap_err().into();
    assert!(matches!(err, BlockwireError::SlotEmpty(SlotEmpty(1))));
}

#[tokio::test]
async fn test_empty_inventory() {
    let server = MockServer::start(|fields| match fields[0].as_str() {
        "getPlayer" => players(fields),
        _ => Some(String::new()),
    })
    .await;
    let client = server.client().await;
    let player = client.get_player(0).await.unwrap();

    let inventory = client.get_inventory(&player).await.unwrap();
    assert!(inventory.is_empty());
}

// =========================================================================
// Entities
// =========================================================================

fn sheep(ai: bool) -> String {
    wire(&["abc-1", "SHEEP", "null", "1.5", "70", "3", "8", &ai.to_string()])
}

#[tokio::test]
async fn test_spawn_and_edit_entity() {
    let mut server = MockServer::start(|fields| match fields[0].as_str() {
        "spawnEntity" => Some(sheep(true)),
        "getEntity" => Some(sheep(false)),
        _ => None,
    })
    .await;
    let client = server.client().await;

    let entity = client
        .spawn_entity(1, 70, 3, EntityKind::Sheep, Dimension::World)
        .await
        .unwrap();
    assert_eq!(
        server.next_line().await,
        line(&["spawnEntity", "1", "70", "3", "world", "SHEEP"])
    );
    assert_eq!(entity.name, None);
    assert_eq!(entity.ai, Some(true));

    let updated = client.set_entity_ai(&entity, false).await.unwrap();
    assert_eq!(
        server.next_line().await,
        line(&["editEntity", "abc-1", "ai:false"])
    );
    assert_eq!(server.next_line().await, line(&["getEntity", "abc-1"]));
    assert_eq!(updated.ai, Some(false));

    client
        .set_entity_position(&entity, 1.5, 70.0, -3.0, Dimension::Nether)
        .await
        .unwrap();
    assert_eq!(
        server.next_line().await,
        line(&["editEntity", "abc-1", "position:1.5;70;-3;world_nether"])
    );
    server.next_line().await;

    client.set_entity_name(&entity, "Dolly").await.unwrap();
    assert_eq!(
        server.next_line().await,
        line(&["editEntity", "abc-1", "name:Dolly"])
    );
}

#[tokio::test]
async fn test_unspawned_entity_is_rejected() {
    let mut server = MockServer::start(|_| None).await;
    let client = server.client().await;
    let entity = Entity::new(EntityKind::Sheep);

    let err = client.set_entity_health(&entity, 0.0).await.unwrap_err();
    assert!(matches!(err, BlockwireError::Validation(_)));
    let err = client.get_entity(&entity).await.unwrap_err();
    assert!(matches!(err, BlockwireError::Validation(_)));
    server.assert_quiet().await;
}

#[tokio::test]
async fn test_unknown_entity_type_is_a_decode_error() {
    let server = MockServer::start(|_| {
        Some(wire(&["id", "FUTURE_MOB", "null", "0", "0", "0", "1", "true"]))
    })
    .await;
    let client = server.client().await;

    let err = client
        .spawn_entity(0, 0, 0, EntityKind::Pig, Dimension::World)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        BlockwireError::Protocol(ProtocolError::UnknownEntity(_))
    ));
    assert!(!err.is_timeout());
}

// =========================================================================
// Boss bars
// =========================================================================

#[tokio::test]
async fn test_boss_bar_value_bounds() {
    let mut server = MockServer::start(|_| None).await;
    let client = server.client().await;

    let mut bar = client.create_boss_bar("boss", "The Boss").await.unwrap();
    assert_eq!(
        server.next_line().await,
        line(&["spawnBossBar", "boss", "The Boss"])
    );
    assert_eq!(bar.value, 0.0);
    assert_eq!(bar.style, BossBarStyle::Solid);
    assert_eq!(bar.color, BossBarColor::Purple);

    for value in [-0.01, 1.01, f64::NAN] {
        let err = client.set_boss_bar_value(&mut bar, value).await.unwrap_err();
        assert!(matches!(err, BlockwireError::Validation(_)));
    }
    server.assert_quiet().await;
    assert_eq!(bar.value, 0.0);

    client.set_boss_bar_value(&mut bar, 0.0).await.unwrap();
    assert_eq!(
        server.next_line().await,
        line(&["editBossBar", "value", "boss", "value:0"])
    );
    client.set_boss_bar_value(&mut bar, 1.0).await.unwrap();
    assert_eq!(
        server.next_line().await,
        line(&["editBossBar", "value", "boss", "value:1"])
    );
    assert_eq!(bar.value, 1.0);
}

#[tokio::test]
async fn test_boss_bar_edits_update_mirror() {
    let mut server = MockServer::start(|_| None).await;
    let client = server.client().await;
    let mut bar = client.create_boss_bar("wave", "Wave 1").await.unwrap();
    server.next_line().await;

    client.set_boss_bar_text(&mut bar, "Wave 2").await.unwrap();
    client.set_boss_bar_color(&mut bar, BossBarColor::Red).await.unwrap();
    client
        .set_boss_bar_style(&mut bar, BossBarStyle::Segmented10)
        .await
        .unwrap();
    assert_eq!(bar.display_text, "Wave 2");
    assert_eq!(bar.color, BossBarColor::Red);
    assert_eq!(bar.style, BossBarStyle::Segmented10);

    assert_eq!(
        server.next_line().await,
        line(&["editBossBar", "text", "wave", "text:Wave 2"])
    );
    assert_eq!(
        server.next_line().await,
        line(&["editBossBar", "color", "wave", "color:red"])
    );
    assert_eq!(
        server.next_line().await,
        line(&["editBossBar", "style", "wave", "style:segmented_10"])
    );

    client.delete_boss_bar(bar).await.unwrap();
    assert_eq!(server.next_line().await, line(&["deleteBossBar", "wave"]));
}

// =========================================================================
// Connection handling
// =========================================================================

#[tokio::test]
async fn test_silent_server_times_out() {
    let server = MockServer::start(|_| None).await;
    let client = server
        .client_with(
            ConnectConfig::default().with_timeout(Some(Duration::from_millis(100))),
        )
        .await;

    let started = Instant::now();
    let err = client.get_player(0).await.unwrap_err();
    assert!(err.is_timeout(), "expected timeout, got {err:?}");
    assert!(started.elapsed() < Duration::from_secs(1));
}

#[tokio::test]
async fn test_late_reply_is_not_read_by_next_query() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    let (closed_tx, mut closed_rx) = mpsc::unbounded_channel();

    tokio::spawn(async move {
        // First connection answers getPlayer too late, then waits for EOF.
        let (socket, _) = listener.accept().await.unwrap();
        let (reader, mut writer) = socket.into_split();
        let mut lines = BufReader::new(reader).lines();
        lines.next_line().await.unwrap();
        tokio::time::sleep(Duration::from_millis(300)).await;
        let reply = format!("{}\n", player_wire("0", "Steve", 20.0));
        let _ = writer.write_all(reply.as_bytes()).await;
        while let Ok(Some(_)) = lines.next_line().await {}
        let _ = closed_tx.send(());

        // Second connection answers promptly.
        let (socket, _) = listener.accept().await.unwrap();
        let (reader, mut writer) = socket.into_split();
        let mut lines = BufReader::new(reader).lines();
        while let Ok(Some(_)) = lines.next_line().await {
            writer.write_all(b"STONE\n").await.unwrap();
        }
    });

    let config = ConnectConfig::default().with_timeout(Some(Duration::from_millis(100)));
    let client = Client::new();
    client.connect("127.0.0.1", port, config.clone()).await.unwrap();

    let err = client.get_player(0).await.unwrap_err();
    assert!(err.is_timeout(), "expected timeout, got {err:?}");
    assert!(!client.is_connected().await);

    tokio::time::sleep(Duration::from_millis(400)).await;
    let err = client
        .get_block(0, 63, 0, Dimension::World)
        .await
        .unwrap_err();
    assert!(err.is_not_connected(), "expected not connected, got {err:?}");
    tokio::time::timeout(Duration::from_secs(2), closed_rx.recv())
        .await
        .expect("timed-out connection should be closed")
        .unwrap();

    client.connect("127.0.0.1", port, config).await.unwrap();
    let block = client.get_block(0, 63, 0, Dimension::World).await.unwrap();
    assert_eq!(block.kind, Material::Stone);
}

#[tokio::test]
async fn test_commands_without_connection_fail() {
    let client = Client::new();
    assert!(!client.is_connected().await);

    let err = client.get_player(0).await.unwrap_err();
    assert!(err.is_not_connected());
    let err = client.post_chat("hi").await.unwrap_err();
    assert!(err.is_not_connected());
    assert!(client.close().await.unwrap_err().is_not_connected());
}

#[tokio::test]
async fn test_connect_failure_is_reported() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let client = Client::new();
    let err = client
        .connect("127.0.0.1", port, ConnectConfig::default())
        .await
        .unwrap_err();
    assert!(matches!(err, BlockwireError::Transport(_)));
    assert!(!client.is_connected().await);
}

#[tokio::test]
async fn test_reconnect_closes_previous_connection() {
    let mut server = MockServer::start(|_| None).await;
    let client = server.client().await;

    client.post_chat("one").await.unwrap();
    assert_eq!(
        server.next_event().await,
        Event::Line(1, line(&["postChat", "one"]))
    );

    client
        .connect("127.0.0.1", server.port, ConnectConfig::default())
        .await
        .unwrap();
    client.post_chat("two").await.unwrap();

    let mut events = vec![server.next_event().await, server.next_event().await];
    events.sort_by_key(|e| matches!(e, Event::Line(..)));
    assert_eq!(
        events,
        [Event::Closed(1), Event::Line(2, line(&["postChat", "two"]))]
    );
}

#[tokio::test]
async fn test_close_then_reconnect() {
    let mut server = MockServer::start(|_| None).await;
    let client = server.client().await;
    assert!(client.is_connected().await);

    client.close().await.unwrap();
    assert!(!client.is_connected().await);
    assert_eq!(server.next_event().await, Event::Closed(1));
    assert!(client.post_chat("lost").await.unwrap_err().is_not_connected());

    client
        .connect("127.0.0.1", server.port, ConnectConfig::default())
        .await
        .unwrap();
    client.post_chat("back").await.unwrap();
    assert_eq!(
        server.next_event().await,
        Event::Line(2, line(&["postChat", "back"]))
    );
}

#[tokio::test]
async fn test_host_override_wins() {
    let mut server = MockServer::start(|_| None).await;
    let config = ConnectConfig::from_lookup(|key| {
        (key == blockwire::HOST_OVERRIDE_ENV).then(|| "127.0.0.1".to_string())
    });

    let client = Client::new();
    client
        .connect("no-such-host.invalid", server.port, config)
        .await
        .unwrap();
    client.post_chat("routed").await.unwrap();
    assert_eq!(server.next_line().await, line(&["postChat", "routed"]));
}

#[tokio::test]
async fn test_concurrent_queries_get_their_own_responses() {
    let server = MockServer::start(players).await;
    let client = Arc::new(server.client().await);

    let tasks: Vec<_> = (0..8)
        .map(|index| {
            let client = Arc::clone(&client);
            tokio::spawn(async move { (index, client.get_player(index).await) })
        })
        .collect();

    for task in tasks {
        let (index, player) = task.await.unwrap();
        let player = player.unwrap();
        assert_eq!(player.id, PlayerId(index));
        assert_eq!(player.name, format!("player-{index}"));
    }
}
