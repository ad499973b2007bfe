use std::fmt;


/// Graph storage a benchmark run was measured with.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Representation {
    /// Adjacency list (`LA`).
    List,
    /// Adjacency matrix (`MA`).
    Matrix,
    /// Unrecognized label, kept upper-cased.
    Other(String),
}


impl Representation {
    pub fn normalize(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "la" | "lista" | "list" | "lista_adjacencia" | "1" => Self::List,
            "ma" | "matriz" | "matriz_adjacencia" | "matrix" | "2" => Self::Matrix,
            _ => Self::Other(label.trim().to_uppercase()),
        }
    }
    
    pub fn is_canonical(&self) -> bool {
        matches!(self, Self::List | Self::Matrix)
    }
    
    pub fn label(&self) -> &str {
        match self {
            Self::List => "LA",
            Self::Matrix => "MA",
            Self::Other(s) => s,
        }
    }
}


impl fmt::Display for Representation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
