use crate::domain::showcase::Showcase;

#[derive(Clone, Debug)]
pub struct ShowcaseBlock {
    pub title: String,
    pub subtitle: Option<String>,
    pub body_lines: Vec<String>,
}

#[derive(Clone, Debug)]
pub struct ShowcaseFrame {
    pub headline: String,
    pub blocks: Vec<ShowcaseBlock>,
    pub footer: String,
}

pub trait ShowcaseRendererPort {
    fn compose(&self, showcase: &Showcase) -> ShowcaseFrame;
}
