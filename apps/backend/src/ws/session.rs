//! Per-connection WebSocket session actor.

use std::time::{Duration, Instant};

use actix::prelude::{Actor, ActorContext, AsyncContext, Handler, StreamHandler};
use actix_web::{web, Error, HttpRequest, HttpResponse};
use actix_web_actors::ws;
use tracing::{info, warn};
use uuid::Uuid;

use crate::errors::ErrorCode;
use crate::services::game_flow;
use crate::state::app_state::AppState;
use crate::ws::hub::Deliver;
use crate::ws::protocol::{ClientMsg, ServerMsg};

const HEARTBEAT_INTERVAL: Duration = Duration::from_secs(20);
const CLIENT_TIMEOUT: Duration = Duration::from_secs(40);

pub async fn upgrade(
    req: HttpRequest,
    stream: web::Payload,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, Error> {
    let session = WsSession::new(Uuid::new_v4(), app_state);
    ws::start(session, &req, stream)
}

pub struct WsSession {
    conn_id: Uuid,
    app_state: web::Data<AppState>,
    last_heartbeat: Instant,
}

impl WsSession {
    fn new(conn_id: Uuid, app_state: web::Data<AppState>) -> Self {
        Self {
            conn_id,
            app_state,
            last_heartbeat: Instant::now(),
        }
    }

    fn send_json(ctx: &mut ws::WebsocketContext<Self>, msg: &ServerMsg) {
        match serde_json::to_string(msg) {
            Ok(payload) => ctx.text(payload),
            Err(err) => warn!(error = %err, "[WS SESSION] failed to serialize outbound message"),
        }
    }

    fn send_error_and_close(
        &self,
        ctx: &mut ws::WebsocketContext<Self>,
        code: ErrorCode,
        message: impl Into<String>,
    ) {
        let msg = ServerMsg::Error {
            code,
            message: message.into(),
        };
        Self::send_json(ctx, &msg);
        ctx.close(Some(ws::CloseReason::from(ws::CloseCode::Error)));
        ctx.stop();
    }

    fn start_heartbeat(&self, ctx: &mut ws::WebsocketContext<Self>) {
        ctx.run_interval(HEARTBEAT_INTERVAL, |actor, ctx| {
            if Instant::now().duration_since(actor.last_heartbeat) > CLIENT_TIMEOUT {
                warn!(conn_id = %actor.conn_id, "[WS SESSION] heartbeat timed out");
                ctx.close(Some(ws::CloseReason::from(ws::CloseCode::Normal)));
                ctx.stop();
                return;
            }
            ctx.ping(b"keepalive");
        });
    }

    /// Run one command through the engine. The engine is purely in-memory,
    /// so commands complete synchronously inside the actor.
    fn handle_command(&self, cmd: ClientMsg, ctx: &mut ws::WebsocketContext<Self>) {
        let registry = self.app_state.registry();
        let result = match cmd {
            ClientMsg::CreateGame { player_name } => {
                Ok(game_flow::create_game(&registry, self.conn_id, &player_name))
            }
            ClientMsg::JoinGame { code, player_name } => {
                game_flow::join_game(&registry, self.conn_id, &code, &player_name)
            }
            ClientMsg::StartGame { code } => game_flow::start_game(&registry, &code),
            ClientMsg::PlayHand { code, cards } => {
                game_flow::play_hand(&registry, self.conn_id, &code, &cards)
            }
            ClientMsg::Pass { code } => game_flow::pass(&registry, self.conn_id, &code),
        };

        match result {
            Ok(batch) => registry.dispatch(batch),
            // Recoverable caller mistake: error to the requester only.
            Err(err) => Self::send_json(
                ctx,
                &ServerMsg::Error {
                    code: err.code(),
                    message: err.to_string(),
                },
            ),
        }
    }
}

impl Actor for WsSession {
    type Context = ws::WebsocketContext<Self>;

    fn started(&mut self, ctx: &mut Self::Context) {
        info!(conn_id = %self.conn_id, "[WS SESSION] started");
        let registry = self.app_state.registry();
        registry.register_connection(self.conn_id, ctx.address().recipient::<Deliver>());
        self.start_heartbeat(ctx);
    }

    fn stopped(&mut self, _ctx: &mut Self::Context) {
        let registry = self.app_state.registry();
        // Unregister first so the liveness scan below sees this channel as
        // gone and can tear the game down when it was the last one.
        registry.unregister_connection(self.conn_id);
        let batch = game_flow::disconnect(&registry, self.conn_id);
        registry.dispatch(batch);
        info!(conn_id = %self.conn_id, "[WS SESSION] stopped");
    }
}

impl StreamHandler<Result<ws::Message, ws::ProtocolError>> for WsSession {
    fn handle(&mut self, msg: Result<ws::Message, ws::ProtocolError>, ctx: &mut Self::Context) {
        match msg {
            Ok(ws::Message::Ping(payload)) => {
                self.last_heartbeat = Instant::now();
                ctx.pong(&payload);
            }
            Ok(ws::Message::Pong(_)) => {
                self.last_heartbeat = Instant::now();
            }
            Ok(ws::Message::Text(text)) => {
                self.last_heartbeat = Instant::now();

                let parsed: Result<ClientMsg, _> = serde_json::from_str(&text);
                let Ok(cmd) = parsed else {
                    self.send_error_and_close(ctx, ErrorCode::BadRequest, "Malformed JSON");
                    return;
                };
                self.handle_command(cmd, ctx);
            }
            Ok(ws::Message::Binary(_)) => {
                self.last_heartbeat = Instant::now();
                self.send_error_and_close(ctx, ErrorCode::BadRequest, "Binary not supported");
            }
            Ok(ws::Message::Close(reason)) => {
                ctx.close(reason);
                ctx.stop();
            }
            Ok(ws::Message::Continuation(_)) | Ok(ws::Message::Nop) => {
                self.last_heartbeat = Instant::now();
            }
            Err(err) => {
                warn!(conn_id = %self.conn_id, error = %err, "[WS SESSION] protocol error");
                ctx.close(Some(ws::CloseReason::from(ws::CloseCode::Error)));
                ctx.stop();
            }
        }
    }
}

impl Handler<Deliver> for WsSession {
    type Result = ();

    fn handle(&mut self, msg: Deliver, ctx: &mut Self::Context) -> Self::Result {
        Self::send_json(ctx, &msg.0);
    }
}
