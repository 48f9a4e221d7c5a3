//! The tick driver.
//!
//! A tick takes both queues as they stand when it starts. It applies every
//! taken update in enqueue order, then evaluates every taken check. Whatever
//! is scheduled meanwhile, by the write path or by a rule, is left for the
//! next tick.

use crate::block::BlockId;
use crate::explosion;
use crate::physics::{PhysicsRule, Rule, RuleOutcome};
use crate::ticks::{CheckEntry, Detonation, TickReport};

use super::World;

impl World {
    /// Runs one tick and reports what it did.
    pub fn run_tick(&mut self) -> TickReport {
        self.tick_count += 1;
        let mut report = TickReport::new(self.tick_count);

        let updates = self.updates.drain();
        let checks = self.checks.drain();

        for update in updates {
            if self.write(update.index, update.block, None) {
                report.modified += 1;
            }
        }

        for check in checks {
            report.checks_evaluated += 1;
            self.evaluate(check, &mut report);
        }

        if !report.is_idle() {
            log::trace!(
                "Tick {} of {}: {} modified, {} checks, {} pending",
                report.tick,
                self.name,
                report.modified,
                report.checks_evaluated,
                self.checks.len()
            );
        }
        report
    }

    fn evaluate(&mut self, check: CheckEntry, report: &mut TickReport) {
        let index = check.index;
        let block = self.store.get(index);
        let Some(rule) = Rule::select(block, &check.payload) else {
            return;
        };
        if !rule.is_enabled(&self.config) {
            log::trace!("Skipped {rule:?} at {index}, disabled at {:?}", self.config.level);
            return;
        }

        let (actor, elapsed_ticks) = (check.actor, check.elapsed_ticks);
        let outcome = rule.evaluate(&mut self.context(), check);
        match outcome {
            RuleOutcome::Discard => {}
            RuleOutcome::Reschedule(next) => {
                self.checks.schedule(next);
            }
            RuleOutcome::Decay => {
                self.updates.schedule(index, BlockId::AIR, false);
                report.decayed += 1;
            }
            RuleOutcome::Explode(request) => {
                report.detonations.push(Detonation {
                    pos: request.center,
                    block,
                    actor,
                    elapsed_ticks,
                });
                explosion::resolve(&mut self.context(), &request);
            }
        }
    }
}
