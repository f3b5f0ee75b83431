//! The static assets written into new projects. They are embedded into the binary at
//! build time, so `kickoff` needs nothing but itself to scaffold a project

pub mod python {
    pub const MAIN: &str = include_str!("python/main.py");
    pub const REQUIREMENTS: &str = include_str!("python/requirements.txt");
    pub const GITIGNORE: &str = include_str!("python/gitignore");
}

pub mod go {
    pub const MAIN: &str = include_str!("go/main.go");
}

pub mod rust {
    pub const MAIN: &str = include_str!("rust/main.rs");
    pub const GITIGNORE: &str = include_str!("rust/gitignore");
}

pub mod javascript {
    pub const APP: &str = include_str!("javascript/app.js");
    pub const GITIGNORE: &str = include_str!("javascript/gitignore");
}

pub mod typescript {
    pub const INDEX: &str = include_str!("typescript/index.ts");
    pub const GITIGNORE: &str = include_str!("typescript/gitignore");
}

pub mod cpp {
    /// Carries the `<project_name>` placeholder
    pub const CMAKE_LISTS: &str = include_str!("cpp/CMakeLists.txt");
    pub const MAIN: &str = include_str!("cpp/main.cpp");
    pub const GITIGNORE: &str = include_str!("cpp/gitignore");
}

pub mod java {
    pub const MAIN: &str = include_str!("java/Main.java");
    pub const GITIGNORE: &str = include_str!("java/gitignore");
}
