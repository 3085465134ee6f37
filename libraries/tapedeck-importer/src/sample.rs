/// Built-in sample playlist shown in the input box on first load
pub const SAMPLE_PLAYLIST: &str = r#"[
  {
    "title": "Sunset Drive",
    "artist": "SoundHelix",
    "streamUrl": "https://www.soundhelix.com/examples/mp3/SoundHelix-Song-1.mp3"
  },
  {
    "title": "Rainy Morning",
    "artist": "SoundHelix",
    "streamUrl": "https://www.soundhelix.com/examples/mp3/SoundHelix-Song-2.mp3"
  },
  {
    "title": "Moonlit Garden",
    "artist": "SoundHelix",
    "streamUrl": "https://www.soundhelix.com/examples/mp3/SoundHelix-Song-3.mp3"
  }
]"#;
