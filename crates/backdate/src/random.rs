// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Injectable source of uniform integers
//!
//! The generator never touches a global RNG. Production code hands it an
//! [`RngSource`] over the thread RNG; tests hand it a seeded `StdRng` or a
//! [`ScriptedRandom`] to pin exact outputs.

use std::collections::VecDeque;

use rand::Rng;
use rand::rngs::ThreadRng;

/// A source of uniformly distributed integers
pub trait RandomSource {
    /// Draw an integer uniformly from `low..=high`
    ///
    /// Callers guarantee `low <= high`.
    fn uniform(&mut self, low: u32, high: u32) -> u32;
}

impl<S: RandomSource + ?Sized> RandomSource for &mut S {
    fn uniform(&mut self, low: u32, high: u32) -> u32 {
        (**self).uniform(low, high)
    }
}

/// Adapter from any [`rand::Rng`]
#[derive(Debug, Clone)]
pub struct RngSource<R>(R);

impl<R: Rng> RngSource<R> {
    /// Wrap an existing RNG
    #[must_use]
    pub fn new(rng: R) -> Self {
        Self(rng)
    }
}

impl RngSource<ThreadRng> {
    /// The thread-local RNG, seeded from the OS
    #[must_use]
    pub fn thread() -> Self {
        Self(rand::rng())
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn uniform(&mut self, low: u32, high: u32) -> u32 {
        self.0.random_range(low..=high)
    }
}

/// Replays a fixed sequence of draws
///
/// Each value is clamped into the requested range. Once the script runs out
/// every draw returns `low`.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRandom {
    values: VecDeque<u32>,
    draws: usize,
}

impl ScriptedRandom {
    /// Create a source that replays `values` in order
    #[must_use]
    pub fn new(values: impl IntoIterator<Item = u32>) -> Self {
        Self {
            values: values.into_iter().collect(),
            draws: 0,
        }
    }

    /// Total number of draws taken so far
    #[must_use]
    pub fn draws(&self) -> usize {
        self.draws
    }

    /// Values not yet consumed
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.values.len()
    }
}

impl RandomSource for ScriptedRandom {
    fn uniform(&mut self, low: u32, high: u32) -> u32 {
        self.draws += 1;
        self.values
            .pop_front()
            .map_or(low, |v| v.clamp(low, high))
    }
}
