use crate::{EquationSet, InitialConditions, Parameters, TimeSeries};

/// The explicit Euler integrator.
impl EquationSet {
    /// Numerically integrate this equation system using fixed-step explicit
    /// Euler and return the computed trajectories.
    ///
    /// The state starts from `initial` (default 1 per variable) and advances
    /// `num_steps` times by `value + derivative * dt`, clamped at zero. All
    /// variables within one step are updated from the same state snapshot.
    ///
    /// The stepper is not adaptive: a too large `dt` silently produces an
    /// unstable trajectory, and `NaN` values arising from pathological
    /// parameter choices propagate into the result instead of aborting it.
    /// Returns `Err` only when `dt` itself is not a positive finite number.
    pub fn simulate(
        &self,
        initial: &InitialConditions,
        parameters: &Parameters,
        num_steps: usize,
        dt: f64,
    ) -> Result<TimeSeries, String> {
        if !dt.is_finite() || dt <= 0.0 {
            return Err(format!("Invalid time step {}.", dt));
        }

        let slots = self.entry_slots();
        let mut state = vec![0.0; self.state_size()];
        let mut names = Vec::with_capacity(self.entries.len());
        let mut series: Vec<Vec<f64>> = Vec::with_capacity(self.entries.len());
        for (entry, slot) in self.entries.iter().zip(&slots) {
            state[*slot] = initial.get(&entry.name);
            names.push(entry.name.clone());
            let mut trajectory = Vec::with_capacity(num_steps + 1);
            trajectory.push(state[*slot]);
            series.push(trajectory);
        }

        for _ in 0..num_steps {
            let mut next = state.clone();
            for (entry, slot) in slots.iter().enumerate() {
                let derivative = self.derivative_at(entry, &state, parameters);
                let value = state[*slot] + derivative * dt;
                // Concentrations cannot go negative. The comparison (and not
                // `f64::max`) keeps NaN values flowing through.
                next[*slot] = if value < 0.0 { 0.0 } else { value };
            }
            state = next;
            for (entry, slot) in slots.iter().enumerate() {
                series[entry].push(state[*slot]);
            }
        }

        Ok(TimeSeries { dt, names, series })
    }
}

/// Read-only access to the computed trajectories.
impl TimeSeries {
    /// The time step the run was computed with.
    pub fn dt(&self) -> f64 {
        self.dt
    }

    /// The number of Euler steps taken (trajectories have one more value).
    pub fn num_steps(&self) -> usize {
        match self.series.first() {
            Some(trajectory) => trajectory.len() - 1,
            None => 0,
        }
    }

    /// The time grid of the run: `0, dt, 2*dt, ...`, aligned with the
    /// trajectory values.
    pub fn times(&self) -> Vec<f64> {
        (0..=self.num_steps()).map(|i| i as f64 * self.dt).collect()
    }

    /// Return an iterator over the variable names, in graph insertion order.
    pub fn variables(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(|name| name.as_str())
    }

    /// The trajectory of the named variable, or `None` when the variable was
    /// not part of the simulated system.
    pub fn trajectory(&self, variable: &str) -> Option<&[f64]> {
        self.names
            .iter()
            .position(|name| name == variable)
            .map(|index| self.series[index].as_slice())
    }
}
