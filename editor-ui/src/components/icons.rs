use dioxus::prelude::*;

#[component]
pub fn RunIcon() -> Element {
    rsx! {
        svg {
            width: "16px",
            height: "20px",
            "viewBox": "0 0 16 20",
            polygon { "points": "0 0 0 20 16 10" }
        }
    }
}

#[component]
pub fn ExportIcon() -> Element {
    rsx! {
        svg {
            width: "24px",
            height: "16px",
            "viewBox": "0 0 24 16",
            path {
                "d": "M19.3501,6.05005 C18.6499,2.6001 15.6499,0 12,0 C9.1001,0 6.6001,1.6499 5.3501,4.05005 C2.3501,4.3501 0,6.8999 0,10 C0,13.2998 2.69995,16 6,16 L19,16 C21.75,16 24,13.75 24,11 C24,8.3501 21.9502,6.19995 19.3501,6.05005 L19.3501,6.05005 Z M10.4,8.6 L10.4,4.8 L13.6,4.8 L13.6,8.6 L17,8.6 L12,13.6 L7,8.6 L10.4,8.6 L10.4,8.6 Z",
            }
        }
    }
}

#[component]
pub fn EmbedIcon() -> Element {
    rsx! {
        svg {
            width: "20px",
            height: "18px",
            "viewBox": "0 0 20 18",
            path {
                "fill-rule": "evenodd",
                "d": "M0,6.76551724 L6.02049911,1.59310345 L6.02049911,4.34482759 L1.8872549,7.77931034 L1.8872549,7.86206897 L6.02049911,11.2965517 L6.02049911,14.0482759 L0,8.87586207 L0,6.76551724 Z M8.39349376,18 L6.47504456,18 L11.6065062,0 L13.5249554,0 L8.39349376,18 Z M20,8.87586207 L13.9795009,14.0482759 L13.9795009,11.2965517 L18.1127451,7.86206897 L18.1127451,7.77931034 L13.9795009,4.34482759 L13.9795009,1.59310345 L20,6.76551724 L20,8.87586207 Z",
            }
        }
    }
}

#[component]
pub fn SearchIcon() -> Element {
    rsx! {
        svg {
            width: "18px",
            height: "18px",
            "viewBox": "0 0 18 18",
            path {
                "d": "M12.5,11 L11.71,11 L11.43,10.73 C12.41,9.59 13,8.11 13,6.5 C13,2.91 10.09,0 6.5,0 C2.91,0 0,2.91 0,6.5 C0,10.09 2.91,13 6.5,13 C8.11,13 9.59,12.41 10.73,11.43 L11,11.71 L11,12.5 L16,17.49 L17.49,16 L12.5,11 L12.5,11 Z M6.5,11 C4.01,11 2,8.99 2,6.5 C2,4.01 4.01,2 6.5,2 C8.99,2 11,4.01 11,6.5 C11,8.99 8.99,11 6.5,11 L6.5,11 Z",
            }
        }
    }
}
