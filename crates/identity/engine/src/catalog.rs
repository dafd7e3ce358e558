//! Per-family attribute catalogs.
//!
//! Immutable module-scoped constant tables: one [`PlatformCatalog`] per
//! platform family. Hardware and screen pools are ordered low→high
//! capability (the sampler slices them by tier); touch-point lists are
//! weighted by repetition.
//!
//! The renderer strings mirror what Chromium actually reports through
//! `UNMASKED_RENDERER_WEBGL`: ANGLE/D3D11 strings on Windows, ANGLE Metal
//! strings on macOS, Mesa driver strings on Linux. Keeping that shape is
//! what lets the platform/GPU coherence rules key off substrings.

use cloak_identity_types::{
    CatalogError, GpuDescriptor, GpuTier, HardwareSpec, PlatformCatalog, PlatformFamily,
    ScreenSpec,
};

use crate::locale;

static WINDOWS: PlatformCatalog = PlatformCatalog {
    family: PlatformFamily::WindowsLike,
    user_agents: &[
        "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36",
        "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/125.0.0.0 Safari/537.36",
        "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/126.0.0.0 Safari/537.36",
        "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/126.0.0.0 Safari/537.36 Edg/126.0.0.0",
        "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:127.0) Gecko/20100101 Firefox/127.0",
    ],
    gpus: &[
        GpuDescriptor {
            vendor: "Google Inc. (Intel)",
            renderer: "ANGLE (Intel, Intel(R) UHD Graphics 630 Direct3D11 vs_5_0 ps_5_0, D3D11)",
            tier: GpuTier::Integrated,
        },
        GpuDescriptor {
            vendor: "Google Inc. (Intel)",
            renderer: "ANGLE (Intel, Intel(R) Iris(R) Xe Graphics Direct3D11 vs_5_0 ps_5_0, D3D11)",
            tier: GpuTier::Integrated,
        },
        GpuDescriptor {
            vendor: "Google Inc. (AMD)",
            renderer: "ANGLE (AMD, AMD Radeon(TM) Graphics Direct3D11 vs_5_0 ps_5_0, D3D11)",
            tier: GpuTier::Integrated,
        },
        GpuDescriptor {
            vendor: "Google Inc. (NVIDIA)",
            renderer: "ANGLE (NVIDIA, NVIDIA GeForce GTX 1650 Direct3D11 vs_5_0 ps_5_0, D3D11)",
            tier: GpuTier::Mid,
        },
        GpuDescriptor {
            vendor: "Google Inc. (NVIDIA)",
            renderer: "ANGLE (NVIDIA, NVIDIA GeForce RTX 3060 Direct3D11 vs_5_0 ps_5_0, D3D11)",
            tier: GpuTier::Mid,
        },
        GpuDescriptor {
            vendor: "Google Inc. (AMD)",
            renderer: "ANGLE (AMD, AMD Radeon RX 6600 Direct3D11 vs_5_0 ps_5_0, D3D11)",
            tier: GpuTier::Mid,
        },
        GpuDescriptor {
            vendor: "Google Inc. (NVIDIA)",
            renderer: "ANGLE (NVIDIA, NVIDIA GeForce RTX 3080 Direct3D11 vs_5_0 ps_5_0, D3D11)",
            tier: GpuTier::High,
        },
        GpuDescriptor {
            vendor: "Google Inc. (NVIDIA)",
            renderer: "ANGLE (NVIDIA, NVIDIA GeForce RTX 4090 Direct3D11 vs_5_0 ps_5_0, D3D11)",
            tier: GpuTier::High,
        },
        GpuDescriptor {
            vendor: "Google Inc. (AMD)",
            renderer: "ANGLE (AMD, AMD Radeon RX 7900 XT Direct3D11 vs_5_0 ps_5_0, D3D11)",
            tier: GpuTier::High,
        },
    ],
    hardware: &[
        HardwareSpec { cores: 2, memory_gib: 4 },
        HardwareSpec { cores: 4, memory_gib: 8 },
        HardwareSpec { cores: 6, memory_gib: 8 },
        HardwareSpec { cores: 8, memory_gib: 16 },
        HardwareSpec { cores: 12, memory_gib: 16 },
        HardwareSpec { cores: 12, memory_gib: 32 },
        HardwareSpec { cores: 16, memory_gib: 32 },
        HardwareSpec { cores: 24, memory_gib: 64 },
    ],
    screens: &[
        ScreenSpec { width: 1366, height: 768, pixel_ratio: 1.0, color_depth: 24 },
        ScreenSpec { width: 1536, height: 864, pixel_ratio: 1.25, color_depth: 24 },
        ScreenSpec { width: 1920, height: 1080, pixel_ratio: 1.0, color_depth: 24 },
        ScreenSpec { width: 1920, height: 1080, pixel_ratio: 1.25, color_depth: 24 },
        ScreenSpec { width: 2560, height: 1440, pixel_ratio: 1.0, color_depth: 24 },
        ScreenSpec { width: 2560, height: 1440, pixel_ratio: 1.25, color_depth: 24 },
        ScreenSpec { width: 3440, height: 1440, pixel_ratio: 1.0, color_depth: 24 },
        ScreenSpec { width: 3840, height: 2160, pixel_ratio: 1.5, color_depth: 24 },
    ],
    // Weighted toward non-touch desktops; 10 and 5 cover convertibles.
    touch_points: &[0, 0, 0, 0, 0, 0, 0, 10, 10, 5],
};

static MAC: PlatformCatalog = PlatformCatalog {
    family: PlatformFamily::MacLike,
    user_agents: &[
        "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36",
        "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/125.0.0.0 Safari/537.36",
        "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/126.0.0.0 Safari/537.36",
        "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.5 Safari/605.1.15",
    ],
    gpus: &[
        GpuDescriptor {
            vendor: "Google Inc. (Intel)",
            renderer: "ANGLE (Intel, Intel(R) Iris(TM) Plus Graphics 655, OpenGL 4.1)",
            tier: GpuTier::Integrated,
        },
        GpuDescriptor {
            vendor: "Google Inc. (Apple)",
            renderer: "ANGLE (Apple, ANGLE Metal Renderer: Apple M1, Unspecified Version)",
            tier: GpuTier::Mid,
        },
        GpuDescriptor {
            vendor: "Google Inc. (Apple)",
            renderer: "ANGLE (Apple, ANGLE Metal Renderer: Apple M2, Unspecified Version)",
            tier: GpuTier::Mid,
        },
        GpuDescriptor {
            vendor: "Google Inc. (Apple)",
            renderer: "ANGLE (Apple, ANGLE Metal Renderer: Apple M3, Unspecified Version)",
            tier: GpuTier::Mid,
        },
        GpuDescriptor {
            vendor: "Google Inc. (Apple)",
            renderer: "ANGLE (Apple, ANGLE Metal Renderer: Apple M2 Pro, Unspecified Version)",
            tier: GpuTier::High,
        },
        GpuDescriptor {
            vendor: "Google Inc. (Apple)",
            renderer: "ANGLE (Apple, ANGLE Metal Renderer: Apple M3 Max, Unspecified Version)",
            tier: GpuTier::High,
        },
    ],
    hardware: &[
        HardwareSpec { cores: 4, memory_gib: 8 },
        HardwareSpec { cores: 8, memory_gib: 8 },
        HardwareSpec { cores: 8, memory_gib: 16 },
        HardwareSpec { cores: 10, memory_gib: 16 },
        HardwareSpec { cores: 10, memory_gib: 32 },
        HardwareSpec { cores: 12, memory_gib: 32 },
        HardwareSpec { cores: 14, memory_gib: 64 },
        HardwareSpec { cores: 16, memory_gib: 64 },
    ],
    // Retina panels only: a mac-like identity with pixel ratio 1 trips the
    // screen-unusual rule.
    screens: &[
        ScreenSpec { width: 1440, height: 900, pixel_ratio: 2.0, color_depth: 30 },
        ScreenSpec { width: 1512, height: 982, pixel_ratio: 2.0, color_depth: 30 },
        ScreenSpec { width: 1680, height: 1050, pixel_ratio: 2.0, color_depth: 30 },
        ScreenSpec { width: 1728, height: 1117, pixel_ratio: 2.0, color_depth: 30 },
        ScreenSpec { width: 1792, height: 1120, pixel_ratio: 2.0, color_depth: 30 },
        ScreenSpec { width: 2056, height: 1329, pixel_ratio: 2.0, color_depth: 30 },
        ScreenSpec { width: 2560, height: 1440, pixel_ratio: 2.0, color_depth: 30 },
        ScreenSpec { width: 2880, height: 1800, pixel_ratio: 2.0, color_depth: 30 },
    ],
    touch_points: &[0],
};

static LINUX: PlatformCatalog = PlatformCatalog {
    family: PlatformFamily::LinuxLike,
    user_agents: &[
        "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36",
        "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/125.0.0.0 Safari/537.36",
        "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/126.0.0.0 Safari/537.36",
        "Mozilla/5.0 (X11; Linux x86_64; rv:127.0) Gecko/20100101 Firefox/127.0",
    ],
    gpus: &[
        GpuDescriptor {
            vendor: "Google Inc. (Intel)",
            renderer: "ANGLE (Intel, Mesa Intel(R) UHD Graphics 620 (KBL GT2), OpenGL 4.6 (Core Profile) Mesa 23.2.1)",
            tier: GpuTier::Integrated,
        },
        GpuDescriptor {
            vendor: "Google Inc. (Intel)",
            renderer: "ANGLE (Intel, Mesa Intel(R) Xe Graphics (TGL GT2), OpenGL 4.6 (Core Profile) Mesa 23.2.1)",
            tier: GpuTier::Integrated,
        },
        GpuDescriptor {
            vendor: "Google Inc. (AMD)",
            renderer: "ANGLE (AMD, AMD Radeon RX 6600 (radeonsi, navi23, LLVM 15.0.7), OpenGL 4.6 (Core Profile) Mesa 23.2.1)",
            tier: GpuTier::Mid,
        },
        GpuDescriptor {
            vendor: "Google Inc. (NVIDIA)",
            renderer: "ANGLE (NVIDIA, NVIDIA GeForce GTX 1660/PCIe/SSE2, OpenGL 4.5.0 NVIDIA 535.154.05)",
            tier: GpuTier::Mid,
        },
        GpuDescriptor {
            vendor: "Google Inc. (NVIDIA)",
            renderer: "ANGLE (NVIDIA, NVIDIA GeForce RTX 3070/PCIe/SSE2, OpenGL 4.5.0 NVIDIA 535.154.05)",
            tier: GpuTier::High,
        },
    ],
    hardware: &[
        HardwareSpec { cores: 2, memory_gib: 4 },
        HardwareSpec { cores: 4, memory_gib: 8 },
        HardwareSpec { cores: 4, memory_gib: 16 },
        HardwareSpec { cores: 6, memory_gib: 16 },
        HardwareSpec { cores: 8, memory_gib: 16 },
        HardwareSpec { cores: 8, memory_gib: 32 },
        HardwareSpec { cores: 16, memory_gib: 32 },
        HardwareSpec { cores: 24, memory_gib: 64 },
    ],
    screens: &[
        ScreenSpec { width: 1366, height: 768, pixel_ratio: 1.0, color_depth: 24 },
        ScreenSpec { width: 1600, height: 900, pixel_ratio: 1.0, color_depth: 24 },
        ScreenSpec { width: 1920, height: 1080, pixel_ratio: 1.0, color_depth: 24 },
        ScreenSpec { width: 2560, height: 1080, pixel_ratio: 1.0, color_depth: 24 },
        ScreenSpec { width: 2560, height: 1440, pixel_ratio: 1.0, color_depth: 24 },
        ScreenSpec { width: 3840, height: 2160, pixel_ratio: 1.0, color_depth: 24 },
    ],
    touch_points: &[0],
};

/// The catalog for one platform family.
pub fn platform_catalog(family: PlatformFamily) -> &'static PlatformCatalog {
    match family {
        PlatformFamily::WindowsLike => &WINDOWS,
        PlatformFamily::MacLike => &MAC,
        PlatformFamily::LinuxLike => &LINUX,
    }
}

/// Check every catalog invariant the generator relies on.
///
/// Empty or unordered pools are build-time defects, not runtime
/// conditions; this runs in tests and at CLI startup so they fail loudly
/// during development.
pub fn verify() -> Result<(), CatalogError> {
    for family in PlatformFamily::ALL {
        let catalog = platform_catalog(family);
        verify_non_empty(family, "user-agent", catalog.user_agents.len())?;
        verify_non_empty(family, "gpu", catalog.gpus.len())?;
        verify_non_empty(family, "hardware", catalog.hardware.len())?;
        verify_non_empty(family, "screen", catalog.screens.len())?;
        verify_non_empty(family, "touch-point", catalog.touch_points.len())?;

        for (index, pair) in catalog.hardware.windows(2).enumerate() {
            if pair[1].cores < pair[0].cores {
                return Err(CatalogError::UnorderedPool {
                    family,
                    pool: "hardware",
                    index: index + 1,
                });
            }
        }
        for (index, pair) in catalog.screens.windows(2).enumerate() {
            if pair[1].width < pair[0].width {
                return Err(CatalogError::UnorderedPool {
                    family,
                    pool: "screen",
                    index: index + 1,
                });
            }
        }

        for tier in [GpuTier::Integrated, GpuTier::Mid, GpuTier::High] {
            if !catalog.gpus.iter().any(|gpu| gpu.tier == tier) {
                return Err(CatalogError::MissingTier {
                    family,
                    tier: tier.as_str(),
                });
            }
        }
    }

    locale::verify()
}

fn verify_non_empty(
    family: PlatformFamily,
    pool: &'static str,
    len: usize,
) -> Result<(), CatalogError> {
    if len == 0 {
        Err(CatalogError::EmptyPool { family, pool })
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalogs_pass_verification() {
        verify().unwrap();
    }

    #[test]
    fn each_family_has_its_own_catalog() {
        for family in PlatformFamily::ALL {
            assert_eq!(platform_catalog(family).family, family);
        }
    }

    #[test]
    fn windows_renderers_are_d3d_backed() {
        for gpu in platform_catalog(PlatformFamily::WindowsLike).gpus {
            assert!(gpu.renderer.contains("Direct3D11"), "{}", gpu.renderer);
        }
    }

    #[test]
    fn mac_renderers_never_mention_mesa_or_d3d() {
        for gpu in platform_catalog(PlatformFamily::MacLike).gpus {
            assert!(!gpu.renderer.contains("Mesa"));
            assert!(!gpu.renderer.contains("Direct3D"));
        }
    }

    #[test]
    fn mac_touch_points_are_all_zero() {
        assert!(platform_catalog(PlatformFamily::MacLike)
            .touch_points
            .iter()
            .all(|&t| t == 0));
    }

    #[test]
    fn mac_screens_are_retina() {
        for screen in platform_catalog(PlatformFamily::MacLike).screens {
            assert!(screen.pixel_ratio >= 2.0);
        }
    }

    #[test]
    fn user_agents_carry_the_platform_marker() {
        for ua in platform_catalog(PlatformFamily::WindowsLike).user_agents {
            assert!(ua.contains("Windows NT"));
        }
        for ua in platform_catalog(PlatformFamily::MacLike).user_agents {
            assert!(ua.contains("Macintosh"));
        }
        for ua in platform_catalog(PlatformFamily::LinuxLike).user_agents {
            assert!(ua.contains("Linux") || ua.contains("X11"));
        }
    }
}
