use crate::locations::LocationOracle;
use crate::scores::ScoreStorage;
use crate::storage::games::HashMapGamesStorage;
use crate::storage::interface::IGameStorage;
use crate::storage::sockets::HashMapClientSocketsStorage;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppContext<GS: IGameStorage> {
    pub games: GS,
    pub sockets: HashMapClientSocketsStorage,
    pub oracle: LocationOracle,
    pub scores: Arc<dyn ScoreStorage>,
}

pub struct RequestContext {
    pub game_id: String,
}

pub fn init(oracle: LocationOracle, scores: Arc<dyn ScoreStorage>) -> AppContext<HashMapGamesStorage> {
    AppContext {
        games: HashMapGamesStorage::default(),
        sockets: HashMapClientSocketsStorage::default(),
        oracle,
        scores,
    }
}
