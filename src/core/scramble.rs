use super::constants::{
    SCRAMBLE_GLYPHS, SCRAMBLE_MAX_SPAN, SCRAMBLE_MAX_START, SCRAMBLE_REFRESH_PROBABILITY,
};
use rand::Rng;

#[derive(Clone, Debug, PartialEq)]
struct Slot {
    from: Option<char>,
    to: Option<char>,
    start: u32,
    end: u32,
    glyph: Option<char>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Segment {
    Settled(char),
    Dud(char),
}

/// Character-by-character "decode" animation from one string to another.
///
/// Each position switches from its old character to random glyphs at its own
/// start frame and settles on the new character at its end frame.
#[derive(Clone, Debug)]
pub struct TextScramble {
    glyphs: Vec<char>,
    slots: Vec<Slot>,
    frame: u32,
}

impl Default for TextScramble {
    fn default() -> Self {
        Self::new(SCRAMBLE_GLYPHS)
    }
}

impl TextScramble {
    pub fn new(glyphs: &str) -> Self {
        Self {
            glyphs: glyphs.chars().collect(),
            slots: Vec::new(),
            frame: 0,
        }
    }

    pub fn set_text<R: Rng + ?Sized>(&mut self, old: &str, new: &str, rng: &mut R) {
        let old: Vec<char> = old.chars().collect();
        let new: Vec<char> = new.chars().collect();
        let len = old.len().max(new.len());
        self.slots = (0..len)
            .map(|i| {
                let start = rng.gen_range(0..SCRAMBLE_MAX_START);
                Slot {
                    from: old.get(i).copied(),
                    to: new.get(i).copied(),
                    start,
                    end: start + rng.gen_range(0..SCRAMBLE_MAX_SPAN),
                    glyph: None,
                }
            })
            .collect();
        self.frame = 0;
    }

    pub fn frame(&self) -> u32 {
        self.frame
    }

    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(|s| self.frame >= s.end)
    }

    /// Produce the current frame's segments and advance the frame counter
    /// unless every position has settled.
    pub fn step<R: Rng + ?Sized>(&mut self, rng: &mut R) -> (Vec<Segment>, bool) {
        let mut segments = Vec::with_capacity(self.slots.len());
        let mut settled = 0;
        for slot in &mut self.slots {
            if self.frame >= slot.end {
                settled += 1;
                segments.extend(slot.to.map(Segment::Settled));
            } else if self.frame >= slot.start {
                let glyph = match slot.glyph {
                    Some(g) if !rng.gen_bool(SCRAMBLE_REFRESH_PROBABILITY) => g,
                    _ => random_glyph(&self.glyphs, rng),
                };
                slot.glyph = Some(glyph);
                segments.push(Segment::Dud(glyph));
            } else {
                segments.extend(slot.from.map(Segment::Settled));
            }
        }
        let complete = settled == self.slots.len();
        if !complete {
            self.frame += 1;
        }
        (segments, complete)
    }
}

fn random_glyph<R: Rng + ?Sized>(glyphs: &[char], rng: &mut R) -> char {
    if glyphs.is_empty() {
        return '_';
    }
    glyphs[rng.gen_range(0..glyphs.len())]
}

pub fn render_html(segments: &[Segment]) -> String {
    let mut out = String::new();
    for segment in segments {
        match *segment {
            Segment::Settled(c) => push_escaped(&mut out, c),
            Segment::Dud(c) => {
                out.push_str("<span class=\"dud\">");
                push_escaped(&mut out, c);
                out.push_str("</span>");
            }
        }
    }
    out
}

pub fn render_text(segments: &[Segment]) -> String {
    segments
        .iter()
        .map(|s| match *s {
            Segment::Settled(c) | Segment::Dud(c) => c,
        })
        .collect()
}

fn push_escaped(out: &mut String, c: char) {
    match c {
        '<' => out.push_str("&lt;"),
        '>' => out.push_str("&gt;"),
        '&' => out.push_str("&amp;"),
        '"' => out.push_str("&quot;"),
        _ => out.push(c),
    }
}
