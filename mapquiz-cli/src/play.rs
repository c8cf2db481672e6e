//! Headless game replays: one click per landmark, folded through the session
//! with a synthetic clock, commands applied to stdout and the file store.

use anyhow::Result;
use log::debug;
use mapquiz_core::{
    record, Command, Event, LatLng, Region, ScoreStore, Session, Transition, ADVANCE_DELAY_SECS,
};
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::store::FileStore;

pub struct Replay {
    clicks: Vec<LatLng>,
    answer_secs: u64,
}

impl Replay {
    pub fn scripted(clicks: Vec<LatLng>, answer_secs: u64) -> Self {
        Replay {
            clicks,
            answer_secs,
        }
    }

    /// Scatter one click around each landmark center; some land inside, some
    /// miss.
    pub fn random(regions: &[Region], seed: u64, answer_secs: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let clicks = regions
            .iter()
            .map(|r| {
                let bounds = r.bounds();
                let spread_lat = bounds.north - bounds.south;
                let spread_lng = bounds.east - bounds.west;
                LatLng::new(
                    r.lat + rng.gen_range(-spread_lat..spread_lat),
                    r.lng + rng.gen_range(-spread_lng..spread_lng),
                )
            })
            .collect();
        Replay {
            clicks,
            answer_secs,
        }
    }

    pub fn run(self, regions: Vec<Region>, store: &mut FileStore) -> Result<()> {
        let mut now = 0;
        let Transition {
            mut session,
            commands,
        } = Session::new(regions, store.get(), now)?;
        apply(&commands, store)?;

        for click in self.clicks {
            if session.is_complete() {
                break;
            }
            now += self.answer_secs;
            let t = session.handle(Event::DoubleClick { point: click, now });
            apply(&t.commands, store)?;
            now += ADVANCE_DELAY_SECS;
            let generation = t.session.generation;
            let t = t.session.handle(Event::AdvanceDue { generation, now });
            apply(&t.commands, store)?;
            session = t.session;
        }
        Ok(())
    }
}

/// Run a command batch: display text goes to stdout, finished times go to
/// the store, everything else is log noise for a headless host.
fn apply(commands: &[Command], store: &mut FileStore) -> Result<()> {
    for command in commands {
        match command {
            Command::SetText { target, text } => println!("{:?}: {}", target, text),
            Command::RecordTime { seconds } => {
                if record(store, *seconds) {
                    store.save()?;
                    println!("New best time: {} seconds", seconds);
                }
            }
            other => debug!("{:?}", other),
        }
    }
    Ok(())
}
