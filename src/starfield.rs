/*
 * Starfield Module
 *
 * This module holds the simulation core: the StarField collection, its
 * creation, the per-frame advance and the projection of every star into
 * draw commands.
 *
 * Stars travel towards the viewer at a constant speed. A star passing the
 * near plane is recycled to the far plane, keeping both its lateral position
 * and the distance it overshot by. Instead of re-sorting by depth each frame,
 * the field remembers the first star recycled in the latest frame and starts
 * drawing from it: that star is now the farthest away, so painting from there
 * and wrapping around keeps back-to-front order.
 */

use rand::Rng;

use crate::params::StarfieldParams;
use crate::star::{DrawCommand, Star};

pub struct StarField {
    stars: Vec<Star>,
    first: usize,
    // Stars recycled by the latest advance
    recycled: usize,
}

impl StarField {
    // Scatter `count` stars over the window (scaled by `scale`) at random depths
    pub fn create<R: Rng>(
        count: usize,
        scale: f32,
        params: &StarfieldParams,
        rng: &mut R,
    ) -> Self {
        let window_size = params.window_size_f();
        let mut stars = Vec::with_capacity(count);

        for _ in 0..count {
            let x = (rng.gen::<f32>() - 0.5) * window_size.x * scale;
            let y = (rng.gen::<f32>() - 0.5) * window_size.y * scale;
            let depth = rng.gen_range(params.near_distance..params.far_distance);
            stars.push(Star::new(x, y, depth));
        }

        // Farthest first, for a consistent initial paint order
        stars.sort_by(|a, b| b.depth.total_cmp(&a.depth));

        log::debug!("Created {} stars (scale {})", stars.len(), scale);

        Self {
            stars,
            first: 0,
            recycled: 0,
        }
    }

    // Build a field from explicit stars, keeping their order
    pub fn from_stars(stars: Vec<Star>) -> Self {
        Self {
            stars,
            first: 0,
            recycled: 0,
        }
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    pub fn len(&self) -> usize {
        self.stars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stars.is_empty()
    }

    // Index of the star drawn first
    pub fn first(&self) -> usize {
        self.first
    }

    // Number of stars recycled by the latest `advance`
    pub fn recycled_count(&self) -> usize {
        self.recycled
    }

    // Move every star one step closer and recycle those passing the near plane.
    // Returns the index of the first recycled star, which also becomes `first`.
    pub fn advance(&mut self, params: &StarfieldParams, dt: f32, paused: bool) -> Option<usize> {
        self.recycled = 0;
        if paused {
            return None;
        }

        let step = params.star_speed * dt;
        let mut first_recycled = None;

        for (i, star) in self.stars.iter_mut().enumerate() {
            star.depth -= step;
            if star.depth <= params.near_distance {
                // Steps larger than the depth range can still land below the near plane
                star.depth = params.far_distance - (params.near_distance - star.depth);
                self.recycled += 1;
                if first_recycled.is_none() {
                    first_recycled = Some(i);
                }
            }
        }

        if let Some(index) = first_recycled {
            log::trace!("Star {} recycled, drawing starts there", index);
            self.first = index;
        }

        first_recycled
    }

    // Star indices in paint order, starting at `first` and wrapping around
    pub fn draw_order(&self) -> impl Iterator<Item = usize> + '_ {
        let n = self.stars.len();
        (0..n).map(move |i| (self.first + i) % n)
    }

    // Project all stars in paint order into `commands`, reusing its allocation
    pub fn project_into(&self, params: &StarfieldParams, commands: &mut Vec<DrawCommand>) {
        commands.clear();
        commands.reserve(self.stars.len());
        commands.extend(self.draw_order().map(|i| self.stars[i].project(params)));
    }
}
