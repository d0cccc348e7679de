/// The ASCII robot and its two mouth states.
use std::borrow::Cow;

/// Robot art with the mouth closed.
pub const ROBOT_ART: &str = r#"                  ,--.    ,--.
                 ((O ))--((O ))
               ,'_`--'____`--'_`.
              _:  ____________  :_
             | | ||::::::::::|| | |
             | | ||::::::::::|| | |
             | | ||::::::::::|| | |
             |_| |/__________\| |_|
               |________________|
            __..-'            `-..__
         .-| : .----------------. : |-.
       ,\ || | |\______________/| | || /.
      /`\. :| | ||  __  __  __  || | |; /\
     :`-._\;.| || '--''--''--' || |,:/_.-':
     |    :  | || .----------. || |  :    |
     |    |  | || '----NAS---' || |  |    |
     |    |  | ||   _   _   _  || |  |    |
     :,--.;  | ||  (_) (_) (_) || |  :,--.;
     (`-'|)  | ||______________|| |  (|`-')
      `--'   | |/______________\| |   `--'
             |____________________|
              `.________________,'
               (_______)(_______)
               (_______)(_______)
               (_______)(_______)
               (_______)(_______)
              |        ||        |
              '--------''--------'
"#;

/// Character swapped in for every `-` while the mouth is open.
pub const MOUTH_OPEN_CHAR: char = 'o';

/// Robot text for the given mouth state.
pub fn robot_frame(mouth_open: bool) -> Cow<'static, str> {
    if mouth_open {
        Cow::Owned(ROBOT_ART.replace('-', &MOUTH_OPEN_CHAR.to_string()))
    } else {
        Cow::Borrowed(ROBOT_ART)
    }
}
