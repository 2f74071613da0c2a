use ship_core::Position;

use crate::traits::Pather;
use crate::traversal::Traversal;

impl Traversal {
    /// Search from `start` until `goal` is taken off the frontier.
    ///
    /// Every neighbor reported by `pather` that lies inside the station and
    /// has not been discovered yet is marked discovered, linked to the cell
    /// being expanded, and pushed onto the frontier. The first link recorded
    /// for a cell is never replaced.
    ///
    /// Returns `true` if `goal` was reached. Use [`path_to`](Self::path_to)
    /// to recover the route.
    pub fn search<P: Pather>(&mut self, pather: &P, start: Position, goal: Position) -> bool {
        self.reset();

        let Some(si) = self.idx(start) else {
            log::warn!("search start {start} outside station of {}", self.dims);
            return false;
        };
        let Some(gi) = self.idx(goal) else {
            log::warn!("search goal {goal} outside station of {}", self.dims);
            return false;
        };

        self.discovered[si] = true;
        self.frontier.push(si);

        let mut nbuf = std::mem::take(&mut self.nbuf);

        let found = loop {
            let Some(ci) = self.frontier.pop() else {
                break false;
            };
            self.expanded += 1;

            if ci == gi {
                break true;
            }

            let cp = self.point(ci);
            nbuf.clear();
            pather.neighbors(cp, &mut nbuf);

            for &np in nbuf.iter() {
                let Some(ni) = self.idx(np) else {
                    continue;
                };
                if self.discovered[ni] {
                    continue;
                }
                if np.level != cp.level {
                    log::trace!("elevator {cp} -> {np}");
                }
                self.discovered[ni] = true;
                self.parent[ni] = Some(ci);
                self.frontier.push(ni);
            }
        };

        self.nbuf = nbuf;

        log::debug!(
            "{} search from {start} to {goal}: {} after expanding {} cells",
            self.mode(),
            if found { "reached" } else { "exhausted" },
            self.expanded
        );
        found
    }

    /// Rebuild the route from `start` to `goal` from the parent links of the
    /// last search.
    ///
    /// Returns the full path (including both endpoints), or `None` if `goal`
    /// was not discovered or its links do not lead back to `start`.
    pub fn path_to(&self, start: Position, goal: Position) -> Option<Vec<Position>> {
        let mut ci = self.idx(goal)?;
        if !self.discovered[ci] {
            return None;
        }
        let si = self.idx(start)?;

        let mut path = vec![goal];
        while ci != si {
            ci = self.parent[ci]?;
            path.push(self.point(ci));
        }
        path.reverse();
        Some(path)
    }
}
