//! Puzzle inputs: TOML puzzle files and inline grid strings.
//!
//! A puzzle file names the start grid, an optional goal (defaults to the
//! ordered layout), and optional search settings:
//!
//! ```toml
//! start = [[1, 2, 3], [5, 6, 0], [4, 7, 8]]
//! goal = [[1, 2, 3], [4, 5, 6], [7, 8, 0]]
//! heuristic = "manhattan"
//! iteration_limit = 10000
//! depth_limit = 0
//! ```
//!
//! Loading checks grid shape only. Permutation and compatibility checks
//! belong to the search, which reports them as typed [`SolveError`]s.
//!
//! [`SolveError`]: tileslide_search::SolveError

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tileslide_kernel::carrier::grid::{GridError, GridV1, Tile};
use tileslide_kernel::proof::hash::{canonical_hash, ContentHash, HashDomain};
use tileslide_search::heuristic::UnknownHeuristic;
use tileslide_search::{GridRole, Heuristic, SearchPolicyV1};

/// Failure to load or interpret a puzzle description.
#[derive(Debug, thiserror::Error)]
pub enum PuzzleFileError {
    #[error("cannot read puzzle file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("puzzle file is not valid TOML: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("{role} grid has a bad shape: {source}")]
    Shape { role: GridRole, source: GridError },
    #[error("{role} grid has a non-numeric tile {token:?}")]
    BadTile { role: GridRole, token: String },
    #[error(transparent)]
    Heuristic(#[from] UnknownHeuristic),
}

/// On-disk puzzle description, as written in TOML.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PuzzleFileV1 {
    pub start: Vec<Vec<Tile>>,
    #[serde(default)]
    pub goal: Option<Vec<Vec<Tile>>>,
    #[serde(default)]
    pub heuristic: Option<String>,
    #[serde(default)]
    pub iteration_limit: Option<u64>,
    #[serde(default)]
    pub depth_limit: Option<u32>,
}

impl PuzzleFileV1 {
    /// Parse a puzzle from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`PuzzleFileError::Toml`] on syntax or schema errors.
    pub fn from_toml_str(s: &str) -> Result<Self, PuzzleFileError> {
        Ok(toml::from_str(s)?)
    }

    /// Read and parse a puzzle file.
    ///
    /// # Errors
    ///
    /// Returns [`PuzzleFileError::Io`] if the file cannot be read, otherwise
    /// as [`Self::from_toml_str`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self, PuzzleFileError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| PuzzleFileError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    /// Build grids and a search policy from the file's fields.
    ///
    /// # Errors
    ///
    /// - [`PuzzleFileError::Shape`] if a grid is empty, ragged, or too large.
    /// - [`PuzzleFileError::Heuristic`] if the heuristic name is unknown.
    pub fn into_spec(self) -> Result<PuzzleSpecV1, PuzzleFileError> {
        let start = GridV1::from_rows(&self.start).map_err(shape(GridRole::Start))?;
        let goal = match self.goal {
            Some(rows) => GridV1::from_rows(&rows).map_err(shape(GridRole::Goal))?,
            None => default_goal(&start)?,
        };
        let mut spec = PuzzleSpecV1::new(start, goal);
        if let Some(name) = self.heuristic {
            spec.policy.heuristic = name.parse()?;
        }
        if let Some(limit) = self.iteration_limit {
            spec.policy.iteration_limit = limit;
        }
        if let Some(limit) = self.depth_limit {
            spec.policy.depth_limit = limit;
        }
        Ok(spec)
    }
}

/// A fully resolved puzzle: grids plus how to search them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzleSpecV1 {
    pub start: GridV1,
    pub goal: GridV1,
    pub policy: SearchPolicyV1,
    /// Run the parity check first and skip the search if it proves the
    /// goal unreachable.
    pub check_parity: bool,
}

impl PuzzleSpecV1 {
    /// A puzzle with the default policy.
    #[must_use]
    pub fn new(start: GridV1, goal: GridV1) -> Self {
        Self {
            start,
            goal,
            policy: SearchPolicyV1::default(),
            check_parity: false,
        }
    }

    /// Build from inline grid strings. A missing goal defaults to the
    /// ordered layout of the start's shape.
    ///
    /// # Errors
    ///
    /// As [`parse_inline_grid`].
    pub fn from_inline(start: &str, goal: Option<&str>) -> Result<Self, PuzzleFileError> {
        let start = parse_inline_grid(start, GridRole::Start)?;
        let goal = match goal {
            Some(text) => parse_inline_grid(text, GridRole::Goal)?,
            None => default_goal(&start)?,
        };
        Ok(Self::new(start, goal))
    }

    #[must_use]
    pub const fn with_heuristic(mut self, heuristic: Heuristic) -> Self {
        self.policy.heuristic = heuristic;
        self
    }

    /// Content hash binding both grids and the policy digest.
    ///
    /// Layout: `start.identity_bytes() ++ goal.identity_bytes() ++ policy_digest`.
    #[must_use]
    pub fn digest(&self) -> ContentHash {
        let mut bytes = self.start.identity_bytes();
        bytes.extend_from_slice(&self.goal.identity_bytes());
        bytes.extend_from_slice(self.policy.digest().as_str().as_bytes());
        canonical_hash(HashDomain::PuzzleFile, &bytes)
    }
}

/// Parse `"1 2 3/4 0 5"`: rows separated by `/`, tiles by whitespace.
///
/// # Errors
///
/// - [`PuzzleFileError::BadTile`] for a token that is not a tile number.
/// - [`PuzzleFileError::Shape`] if the rows are empty or ragged.
pub fn parse_inline_grid(text: &str, role: GridRole) -> Result<GridV1, PuzzleFileError> {
    let rows = text
        .split('/')
        .map(|row| {
            row.split_whitespace()
                .map(|token| {
                    token.parse::<Tile>().map_err(|_| PuzzleFileError::BadTile {
                        role,
                        token: token.to_string(),
                    })
                })
                .collect::<Result<Vec<_>, _>>()
        })
        .collect::<Result<Vec<_>, _>>()?;
    GridV1::from_rows(&rows).map_err(shape(role))
}

fn default_goal(start: &GridV1) -> Result<GridV1, PuzzleFileError> {
    GridV1::ordered(start.rows(), start.cols()).map_err(shape(GridRole::Goal))
}

fn shape(role: GridRole) -> impl FnOnce(GridError) -> PuzzleFileError {
    move |source| PuzzleFileError::Shape { role, source }
}
