//! Minefield model: tile grid, bomb placement, adjacency counts and the
//! mutations the board view dispatches (reveal, flag, reveal-all).

use rand::Rng;
use rand::seq::SliceRandom;
use std::error::Error;
use std::fmt;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Tile {
    pub bomb: bool,
    pub flagged: bool,
    pub visible: bool,
    /// Bombs in the 8-neighbourhood; -1 on bomb tiles.
    pub num_bombs: i32,
}

impl Tile {
    fn new(bomb: bool) -> Self {
        Self {
            bomb,
            ..Default::default()
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MinefieldError {
    EmptyGrid,
    TooManyBombs { bombs: u32, cells: usize },
    OutOfBounds { row: u32, col: u32 },
}

impl fmt::Display for MinefieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MinefieldError::EmptyGrid => write!(f, "minefield needs at least one row and one column"),
            MinefieldError::TooManyBombs { bombs, cells } => {
                write!(f, "{} bombs do not fit in {} tiles", bombs, cells)
            }
            MinefieldError::OutOfBounds { row, col } => {
                write!(f, "tile ({}, {}) is outside the minefield", row, col)
            }
        }
    }
}

impl Error for MinefieldError {}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Minefield {
    width: u32,
    height: u32,
    num_bombs: u32,
    /// Row-major tiles; length = width * height.
    tiles: Vec<Tile>,
}

impl Minefield {
    /// Build a `rows` x `cols` field with `num_bombs` bombs at distinct random tiles.
    pub fn new<R: Rng + ?Sized>(
        rows: u32,
        cols: u32,
        num_bombs: u32,
        rng: &mut R,
    ) -> Result<Self, MinefieldError> {
        let cells = Self::cell_count(rows, cols, num_bombs)?;
        let mut layout = vec![false; cells];
        for slot in layout.iter_mut().take(num_bombs as usize) {
            *slot = true;
        }
        layout.shuffle(rng);
        Ok(Self::from_layout(rows, cols, num_bombs, layout))
    }

    /// Build a field with bombs at exactly the given `(row, col)` positions.
    #[cfg(test)]
    pub fn with_bombs(rows: u32, cols: u32, bombs: &[(u32, u32)]) -> Result<Self, MinefieldError> {
        let cells = Self::cell_count(rows, cols, bombs.len() as u32)?;
        let mut layout = vec![false; cells];
        for &(row, col) in bombs {
            if row >= rows || col >= cols {
                return Err(MinefieldError::OutOfBounds { row, col });
            }
            layout[(row * cols + col) as usize] = true;
        }
        let placed = layout.iter().filter(|b| **b).count() as u32;
        Ok(Self::from_layout(rows, cols, placed, layout))
    }

    fn cell_count(rows: u32, cols: u32, num_bombs: u32) -> Result<usize, MinefieldError> {
        if rows == 0 || cols == 0 {
            return Err(MinefieldError::EmptyGrid);
        }
        let cells = rows as usize * cols as usize;
        if num_bombs as usize > cells {
            return Err(MinefieldError::TooManyBombs {
                bombs: num_bombs,
                cells,
            });
        }
        Ok(cells)
    }

    fn from_layout(rows: u32, cols: u32, num_bombs: u32, layout: Vec<bool>) -> Self {
        let mut field = Self {
            width: cols,
            height: rows,
            num_bombs,
            tiles: layout.into_iter().map(Tile::new).collect(),
        };
        field.set_bomb_numbers();
        field
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn num_bombs(&self) -> u32 {
        self.num_bombs
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn tile(&self, row: u32, col: u32) -> Option<&Tile> {
        self.index(row, col).ok().map(|idx| &self.tiles[idx])
    }

    pub fn index(&self, row: u32, col: u32) -> Result<usize, MinefieldError> {
        if row < self.height && col < self.width {
            Ok((row * self.width + col) as usize)
        } else {
            Err(MinefieldError::OutOfBounds { row, col })
        }
    }

    pub fn coordinates(&self, idx: usize) -> (u32, u32) {
        (idx as u32 / self.width, idx as u32 % self.width)
    }

    /// Indices of the in-bounds tiles around `(row, col)`.
    pub fn neighbours(&self, row: u32, col: u32) -> Vec<usize> {
        let mut out = Vec::with_capacity(8);
        for dy in -1i64..=1 {
            for dx in -1i64..=1 {
                if dx == 0 && dy == 0 {
                    continue;
                }
                let ny = row as i64 + dy;
                let nx = col as i64 + dx;
                if ny < 0 || nx < 0 || ny >= self.height as i64 || nx >= self.width as i64 {
                    continue;
                }
                out.push((ny as u32 * self.width + nx as u32) as usize);
            }
        }
        out
    }

    /// Reveal `(row, col)`. A tile with no adjacent bombs also reveals its
    /// zero-connected region and the numbered border around it; flagged
    /// tiles are left alone by the flood.
    pub fn set_visible(&mut self, row: u32, col: u32) {
        let Ok(start) = self.index(row, col) else {
            return;
        };
        self.tiles[start].visible = true;
        if self.tiles[start].num_bombs != 0 {
            return;
        }
        let mut visited = vec![false; self.tiles.len()];
        visited[start] = true;
        let mut stack = vec![start];
        while let Some(idx) = stack.pop() {
            let (r, c) = self.coordinates(idx);
            for n in self.neighbours(r, c) {
                if visited[n] {
                    continue;
                }
                visited[n] = true;
                let tile = &mut self.tiles[n];
                if tile.flagged {
                    continue;
                }
                tile.visible = true;
                if tile.num_bombs == 0 {
                    stack.push(n);
                }
            }
        }
    }

    /// Toggle the flag on a hidden tile. Revealed tiles cannot be flagged.
    pub fn toggle_flag(&mut self, row: u32, col: u32) {
        if let Ok(idx) = self.index(row, col) {
            let tile = &mut self.tiles[idx];
            if !tile.visible {
                tile.flagged = !tile.flagged;
            }
        }
    }

    pub fn reveal_all(&mut self) {
        for tile in &mut self.tiles {
            tile.visible = true;
        }
    }

    /// Won when every safe tile is open and unflagged and every bomb is
    /// flagged and still hidden.
    pub fn check_victory(&self) -> bool {
        self.tiles.iter().all(|t| {
            if t.bomb {
                t.flagged && !t.visible
            } else {
                t.visible && !t.flagged
            }
        })
    }

    pub fn flags_remaining(&self) -> i64 {
        let flagged = self.tiles.iter().filter(|t| t.flagged).count() as i64;
        self.num_bombs as i64 - flagged
    }

    fn set_bomb_numbers(&mut self) {
        for idx in 0..self.tiles.len() {
            if self.tiles[idx].bomb {
                self.tiles[idx].num_bombs = -1;
                continue;
            }
            let (row, col) = self.coordinates(idx);
            let count = self
                .neighbours(row, col)
                .into_iter()
                .filter(|&n| self.tiles[n].bomb)
                .count();
            self.tiles[idx].num_bombs = count as i32;
        }
    }
}
