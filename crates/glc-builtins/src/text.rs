//! Context-independent built-in function prototypes.
//!
//! Everything here is emitted as GLSL text: the consumer is the same
//! parser that reads user shaders, so a text declaration is the one
//! representation guaranteed to mean the same thing to both.

use glc_types::Stage;

use crate::{BuiltIns, Config};

impl BuiltIns {
    /// Angle, trigonometric, exponential, common, floating-point pack
    /// and geometric functions.
    pub(crate) fn add_math_functions(&mut self, cfg: &Config) {
        self.common().push_str(concat!(
            "float radians(float degrees);",
            "vec2  radians(vec2  degrees);",
            "vec3  radians(vec3  degrees);",
            "vec4  radians(vec4  degrees);",
            "float degrees(float radians);",
            "vec2  degrees(vec2  radians);",
            "vec3  degrees(vec3  radians);",
            "vec4  degrees(vec4  radians);",
            "float sin(float angle);",
            "vec2  sin(vec2  angle);",
            "vec3  sin(vec3  angle);",
            "vec4  sin(vec4  angle);",
            "float cos(float angle);",
            "vec2  cos(vec2  angle);",
            "vec3  cos(vec3  angle);",
            "vec4  cos(vec4  angle);",
            "float tan(float angle);",
            "vec2  tan(vec2  angle);",
            "vec3  tan(vec3  angle);",
            "vec4  tan(vec4  angle);",
            "float asin(float x);",
            "vec2  asin(vec2  x);",
            "vec3  asin(vec3  x);",
            "vec4  asin(vec4  x);",
            "float acos(float x);",
            "vec2  acos(vec2  x);",
            "vec3  acos(vec3  x);",
            "vec4  acos(vec4  x);",
            "float atan(float y, float x);",
            "vec2  atan(vec2  y, vec2  x);",
            "vec3  atan(vec3  y, vec3  x);",
            "vec4  atan(vec4  y, vec4  x);",
            "float atan(float y_over_x);",
            "vec2  atan(vec2  y_over_x);",
            "vec3  atan(vec3  y_over_x);",
            "vec4  atan(vec4  y_over_x);",
            "\n",
        ));

        if cfg.version >= 130 {
            self.common().push_str(concat!(
                "float sinh(float angle);",
                "vec2  sinh(vec2  angle);",
                "vec3  sinh(vec3  angle);",
                "vec4  sinh(vec4  angle);",
                "float cosh(float angle);",
                "vec2  cosh(vec2  angle);",
                "vec3  cosh(vec3  angle);",
                "vec4  cosh(vec4  angle);",
                "float tanh(float angle);",
                "vec2  tanh(vec2  angle);",
                "vec3  tanh(vec3  angle);",
                "vec4  tanh(vec4  angle);",
                "float asinh(float x);",
                "vec2  asinh(vec2  x);",
                "vec3  asinh(vec3  x);",
                "vec4  asinh(vec4  x);",
                "float acosh(float x);",
                "vec2  acosh(vec2  x);",
                "vec3  acosh(vec3  x);",
                "vec4  acosh(vec4  x);",
                "float atanh(float y_over_x);",
                "vec2  atanh(vec2  y_over_x);",
                "vec3  atanh(vec3  y_over_x);",
                "vec4  atanh(vec4  y_over_x);",
                "\n",
            ));
        }

        self.common().push_str(concat!(
            "float pow(float x, float y);",
            "vec2  pow(vec2  x, vec2  y);",
            "vec3  pow(vec3  x, vec3  y);",
            "vec4  pow(vec4  x, vec4  y);",
            "float exp(float x);",
            "vec2  exp(vec2  x);",
            "vec3  exp(vec3  x);",
            "vec4  exp(vec4  x);",
            "float log(float x);",
            "vec2  log(vec2  x);",
            "vec3  log(vec3  x);",
            "vec4  log(vec4  x);",
            "float exp2(float x);",
            "vec2  exp2(vec2  x);",
            "vec3  exp2(vec3  x);",
            "vec4  exp2(vec4  x);",
            "float log2(float x);",
            "vec2  log2(vec2  x);",
            "vec3  log2(vec3  x);",
            "vec4  log2(vec4  x);",
            "float sqrt(float x);",
            "vec2  sqrt(vec2  x);",
            "vec3  sqrt(vec3  x);",
            "vec4  sqrt(vec4  x);",
            "float inversesqrt(float x);",
            "vec2  inversesqrt(vec2  x);",
            "vec3  inversesqrt(vec3  x);",
            "vec4  inversesqrt(vec4  x);",
            "\n",
        ));

        self.common().push_str(concat!(
            "float abs(float x);",
            "vec2  abs(vec2  x);",
            "vec3  abs(vec3  x);",
            "vec4  abs(vec4  x);",
            "float sign(float x);",
            "vec2  sign(vec2  x);",
            "vec3  sign(vec3  x);",
            "vec4  sign(vec4  x);",
            "float floor(float x);",
            "vec2  floor(vec2  x);",
            "vec3  floor(vec3  x);",
            "vec4  floor(vec4  x);",
            "float ceil(float x);",
            "vec2  ceil(vec2  x);",
            "vec3  ceil(vec3  x);",
            "vec4  ceil(vec4  x);",
            "float fract(float x);",
            "vec2  fract(vec2  x);",
            "vec3  fract(vec3  x);",
            "vec4  fract(vec4  x);",
            "float mod(float x, float y);",
            "vec2  mod(vec2  x, float y);",
            "vec3  mod(vec3  x, float y);",
            "vec4  mod(vec4  x, float y);",
            "vec2  mod(vec2  x, vec2  y);",
            "vec3  mod(vec3  x, vec3  y);",
            "vec4  mod(vec4  x, vec4  y);",
            "float min(float x, float y);",
            "vec2  min(vec2  x, float y);",
            "vec3  min(vec3  x, float y);",
            "vec4  min(vec4  x, float y);",
            "vec2  min(vec2  x, vec2  y);",
            "vec3  min(vec3  x, vec3  y);",
            "vec4  min(vec4  x, vec4  y);",
            "float max(float x, float y);",
            "vec2  max(vec2  x, float y);",
            "vec3  max(vec3  x, float y);",
            "vec4  max(vec4  x, float y);",
            "vec2  max(vec2  x, vec2  y);",
            "vec3  max(vec3  x, vec3  y);",
            "vec4  max(vec4  x, vec4  y);",
            "float clamp(float x, float minVal, float maxVal);",
            "vec2  clamp(vec2  x, float minVal, float maxVal);",
            "vec3  clamp(vec3  x, float minVal, float maxVal);",
            "vec4  clamp(vec4  x, float minVal, float maxVal);",
            "vec2  clamp(vec2  x, vec2  minVal, vec2  maxVal);",
            "vec3  clamp(vec3  x, vec3  minVal, vec3  maxVal);",
            "vec4  clamp(vec4  x, vec4  minVal, vec4  maxVal);",
            "float mix(float x, float y, float a);",
            "vec2  mix(vec2  x, vec2  y, float a);",
            "vec3  mix(vec3  x, vec3  y, float a);",
            "vec4  mix(vec4  x, vec4  y, float a);",
            "vec2  mix(vec2  x, vec2  y, vec2  a);",
            "vec3  mix(vec3  x, vec3  y, vec3  a);",
            "vec4  mix(vec4  x, vec4  y, vec4  a);",
            "float step(float edge, float x);",
            "vec2  step(vec2  edge, vec2  x);",
            "vec3  step(vec3  edge, vec3  x);",
            "vec4  step(vec4  edge, vec4  x);",
            "vec2  step(float edge, vec2  x);",
            "vec3  step(float edge, vec3  x);",
            "vec4  step(float edge, vec4  x);",
            "float smoothstep(float edge0, float edge1, float x);",
            "vec2  smoothstep(vec2  edge0, vec2  edge1, vec2  x);",
            "vec3  smoothstep(vec3  edge0, vec3  edge1, vec3  x);",
            "vec4  smoothstep(vec4  edge0, vec4  edge1, vec4  x);",
            "vec2  smoothstep(float edge0, float edge1, vec2  x);",
            "vec3  smoothstep(float edge0, float edge1, vec3  x);",
            "vec4  smoothstep(float edge0, float edge1, vec4  x);",
            "\n",
        ));

        if cfg.at_least(300, 130) {
            self.common().push_str(concat!(
                "  int abs(  int x);",
                "ivec2 abs(ivec2 x);",
                "ivec3 abs(ivec3 x);",
                "ivec4 abs(ivec4 x);",
                "  int sign(  int x);",
                "ivec2 sign(ivec2 x);",
                "ivec3 sign(ivec3 x);",
                "ivec4 sign(ivec4 x);",
                "float trunc(float x);",
                "vec2  trunc(vec2  x);",
                "vec3  trunc(vec3  x);",
                "vec4  trunc(vec4  x);",
                "float round(float x);",
                "vec2  round(vec2  x);",
                "vec3  round(vec3  x);",
                "vec4  round(vec4  x);",
                "float roundEven(float x);",
                "vec2  roundEven(vec2  x);",
                "vec3  roundEven(vec3  x);",
                "vec4  roundEven(vec4  x);",
                "float modf(float x, out float i);",
                "vec2  modf(vec2  x, out vec2  i);",
                "vec3  modf(vec3  x, out vec3  i);",
                "vec4  modf(vec4  x, out vec4  i);",
                "  int min(  int x,   int y);",
                "ivec2 min(ivec2 x,   int y);",
                "ivec3 min(ivec3 x,   int y);",
                "ivec4 min(ivec4 x,   int y);",
                "ivec2 min(ivec2 x, ivec2 y);",
                "ivec3 min(ivec3 x, ivec3 y);",
                "ivec4 min(ivec4 x, ivec4 y);",
                " uint min( uint x,  uint y);",
                "uvec2 min(uvec2 x,  uint y);",
                "uvec3 min(uvec3 x,  uint y);",
                "uvec4 min(uvec4 x,  uint y);",
                "uvec2 min(uvec2 x, uvec2 y);",
                "uvec3 min(uvec3 x, uvec3 y);",
                "uvec4 min(uvec4 x, uvec4 y);",
                "  int max(  int x,   int y);",
                "ivec2 max(ivec2 x,   int y);",
                "ivec3 max(ivec3 x,   int y);",
                "ivec4 max(ivec4 x,   int y);",
                "ivec2 max(ivec2 x, ivec2 y);",
                "ivec3 max(ivec3 x, ivec3 y);",
                "ivec4 max(ivec4 x, ivec4 y);",
                " uint max( uint x,  uint y);",
                "uvec2 max(uvec2 x,  uint y);",
                "uvec3 max(uvec3 x,  uint y);",
                "uvec4 max(uvec4 x,  uint y);",
                "uvec2 max(uvec2 x, uvec2 y);",
                "uvec3 max(uvec3 x, uvec3 y);",
                "uvec4 max(uvec4 x, uvec4 y);",
                "  int clamp(  int x,   int minVal,   int maxVal);",
                "ivec2 clamp(ivec2 x,   int minVal,   int maxVal);",
                "ivec3 clamp(ivec3 x,   int minVal,   int maxVal);",
                "ivec4 clamp(ivec4 x,   int minVal,   int maxVal);",
                "ivec2 clamp(ivec2 x, ivec2 minVal, ivec2 maxVal);",
                "ivec3 clamp(ivec3 x, ivec3 minVal, ivec3 maxVal);",
                "ivec4 clamp(ivec4 x, ivec4 minVal, ivec4 maxVal);",
                " uint clamp( uint x,  uint minVal,  uint maxVal);",
                "uvec2 clamp(uvec2 x,  uint minVal,  uint maxVal);",
                "uvec3 clamp(uvec3 x,  uint minVal,  uint maxVal);",
                "uvec4 clamp(uvec4 x,  uint minVal,  uint maxVal);",
                "uvec2 clamp(uvec2 x, uvec2 minVal, uvec2 maxVal);",
                "uvec3 clamp(uvec3 x, uvec3 minVal, uvec3 maxVal);",
                "uvec4 clamp(uvec4 x, uvec4 minVal, uvec4 maxVal);",
                "float mix(float x, float y, bool  a);",
                "vec2  mix(vec2  x, vec2  y, bvec2 a);",
                "vec3  mix(vec3  x, vec3  y, bvec3 a);",
                "vec4  mix(vec4  x, vec4  y, bvec4 a);",
                "bool  isnan(float x);",
                "bvec2 isnan(vec2  x);",
                "bvec3 isnan(vec3  x);",
                "bvec4 isnan(vec4  x);",
                "bool  isinf(float x);",
                "bvec2 isinf(vec2  x);",
                "bvec3 isinf(vec3  x);",
                "bvec4 isinf(vec4  x);",
                "\n",
            ));
        }

        if cfg.at_least(310, 450) {
            self.common().push_str(concat!(
                "int    mix(int    x, int    y, bool  a);",
                "ivec2  mix(ivec2  x, ivec2  y, bvec2 a);",
                "ivec3  mix(ivec3  x, ivec3  y, bvec3 a);",
                "ivec4  mix(ivec4  x, ivec4  y, bvec4 a);",
                "uint   mix(uint   x, uint   y, bool  a);",
                "uvec2  mix(uvec2  x, uvec2  y, bvec2 a);",
                "uvec3  mix(uvec3  x, uvec3  y, bvec3 a);",
                "uvec4  mix(uvec4  x, uvec4  y, bvec4 a);",
                "bool   mix(bool   x, bool   y, bool  a);",
                "bvec2  mix(bvec2  x, bvec2  y, bvec2 a);",
                "bvec3  mix(bvec3  x, bvec3  y, bvec3 a);",
                "bvec4  mix(bvec4  x, bvec4  y, bvec4 a);",
                "\n",
            ));
        }

        if cfg.at_least(300, 330) {
            self.common().push_str(concat!(
                "int   floatBitsToInt(highp float value);",
                "ivec2 floatBitsToInt(highp vec2  value);",
                "ivec3 floatBitsToInt(highp vec3  value);",
                "ivec4 floatBitsToInt(highp vec4  value);",
                "uint  floatBitsToUint(highp float value);",
                "uvec2 floatBitsToUint(highp vec2  value);",
                "uvec3 floatBitsToUint(highp vec3  value);",
                "uvec4 floatBitsToUint(highp vec4  value);",
                "float intBitsToFloat(highp int   value);",
                "vec2  intBitsToFloat(highp ivec2 value);",
                "vec3  intBitsToFloat(highp ivec3 value);",
                "vec4  intBitsToFloat(highp ivec4 value);",
                "float uintBitsToFloat(highp uint  value);",
                "vec2  uintBitsToFloat(highp uvec2 value);",
                "vec3  uintBitsToFloat(highp uvec3 value);",
                "vec4  uintBitsToFloat(highp uvec4 value);",
                "\n",
            ));
        }

        if cfg.at_least(310, 400) {
            self.common().push_str(concat!(
                "float  fma(float,  float,  float );",
                "vec2   fma(vec2,   vec2,   vec2  );",
                "vec3   fma(vec3,   vec3,   vec3  );",
                "vec4   fma(vec4,   vec4,   vec4  );",
                "\n",
            ));
            if cfg.desktop() {
                self.common().push_str(concat!(
                    "double fma(double, double, double);",
                    "dvec2  fma(dvec2,  dvec2,  dvec2 );",
                    "dvec3  fma(dvec3,  dvec3,  dvec3 );",
                    "dvec4  fma(dvec4,  dvec4,  dvec4 );",
                    "\n",
                ));
            }
            self.common().push_str(concat!(
                "float frexp(highp float, out highp int);",
                "vec2  frexp(highp vec2,  out highp ivec2);",
                "vec3  frexp(highp vec3,  out highp ivec3);",
                "vec4  frexp(highp vec4,  out highp ivec4);",
                "float ldexp(highp float, highp int);",
                "vec2  ldexp(highp vec2,  highp ivec2);",
                "vec3  ldexp(highp vec3,  highp ivec3);",
                "vec4  ldexp(highp vec4,  highp ivec4);",
                "\n",
            ));
        }

        if cfg.desktop_at_least(400) {
            self.common().push_str(concat!(
                "double frexp(double, out int);",
                "dvec2  frexp( dvec2, out ivec2);",
                "dvec3  frexp( dvec3, out ivec3);",
                "dvec4  frexp( dvec4, out ivec4);",
                "double ldexp(double, int);",
                "dvec2  ldexp( dvec2, ivec2);",
                "dvec3  ldexp( dvec3, ivec3);",
                "dvec4  ldexp( dvec4, ivec4);",
                "double packDouble2x32(uvec2);",
                "uvec2 unpackDouble2x32(double);",
                "\n",
            ));
        }

        if cfg.at_least(300, 400) {
            self.common().push_str(concat!(
                "highp uint packUnorm2x16(vec2);",
                "vec2 unpackUnorm2x16(highp uint);",
                "\n",
            ));
        }
        if cfg.at_least(300, 420) {
            self.common().push_str(concat!(
                "highp uint packSnorm2x16(vec2);",
                "vec2 unpackSnorm2x16(highp uint);",
                "highp uint packHalf2x16(vec2);",
                "\n",
            ));
        }
        if cfg.es_at_least(300) {
            self.common()
                .push_str("mediump vec2 unpackHalf2x16(highp uint);\n");
        } else if cfg.desktop_at_least(420) {
            self.common().push_str("vec2 unpackHalf2x16(highp uint);\n");
        }
        if cfg.at_least(310, 400) {
            self.common().push_str(concat!(
                "highp uint packSnorm4x8(vec4);",
                "highp uint packUnorm4x8(vec4);",
                "\n",
            ));
        }
        if cfg.es_at_least(310) {
            self.common().push_str(concat!(
                "mediump vec4 unpackSnorm4x8(highp uint);",
                "mediump vec4 unpackUnorm4x8(highp uint);",
                "\n",
            ));
        } else if cfg.desktop_at_least(400) {
            self.common().push_str(concat!(
                "vec4 unpackSnorm4x8(highp uint);",
                "vec4 unpackUnorm4x8(highp uint);",
                "\n",
            ));
        }

        // double-precision common and geometric functions
        if cfg.desktop_at_least(400) {
            self.common().push_str(concat!(
                "double sqrt(double);",
                "dvec2  sqrt(dvec2);",
                "dvec3  sqrt(dvec3);",
                "dvec4  sqrt(dvec4);",
                "double inversesqrt(double);",
                "dvec2  inversesqrt(dvec2);",
                "dvec3  inversesqrt(dvec3);",
                "dvec4  inversesqrt(dvec4);",
                "double abs(double);",
                "dvec2  abs(dvec2);",
                "dvec3  abs(dvec3);",
                "dvec4  abs(dvec4);",
                "double sign(double);",
                "dvec2  sign(dvec2);",
                "dvec3  sign(dvec3);",
                "dvec4  sign(dvec4);",
                "double floor(double);",
                "dvec2  floor(dvec2);",
                "dvec3  floor(dvec3);",
                "dvec4  floor(dvec4);",
                "double trunc(double);",
                "dvec2  trunc(dvec2);",
                "dvec3  trunc(dvec3);",
                "dvec4  trunc(dvec4);",
                "double round(double);",
                "dvec2  round(dvec2);",
                "dvec3  round(dvec3);",
                "dvec4  round(dvec4);",
                "double roundEven(double);",
                "dvec2  roundEven(dvec2);",
                "dvec3  roundEven(dvec3);",
                "dvec4  roundEven(dvec4);",
                "double ceil(double);",
                "dvec2  ceil(dvec2);",
                "dvec3  ceil(dvec3);",
                "dvec4  ceil(dvec4);",
                "double fract(double);",
                "dvec2  fract(dvec2);",
                "dvec3  fract(dvec3);",
                "dvec4  fract(dvec4);",
                "double mod(double, double);",
                "dvec2  mod(dvec2 , double);",
                "dvec3  mod(dvec3 , double);",
                "dvec4  mod(dvec4 , double);",
                "dvec2  mod(dvec2 , dvec2);",
                "dvec3  mod(dvec3 , dvec3);",
                "dvec4  mod(dvec4 , dvec4);",
                "double modf(double, out double);",
                "dvec2  modf(dvec2,  out dvec2);",
                "dvec3  modf(dvec3,  out dvec3);",
                "dvec4  modf(dvec4,  out dvec4);",
                "double min(double, double);",
                "dvec2  min(dvec2,  double);",
                "dvec3  min(dvec3,  double);",
                "dvec4  min(dvec4,  double);",
                "dvec2  min(dvec2,  dvec2);",
                "dvec3  min(dvec3,  dvec3);",
                "dvec4  min(dvec4,  dvec4);",
                "double max(double, double);",
                "dvec2  max(dvec2 , double);",
                "dvec3  max(dvec3 , double);",
                "dvec4  max(dvec4 , double);",
                "dvec2  max(dvec2 , dvec2);",
                "dvec3  max(dvec3 , dvec3);",
                "dvec4  max(dvec4 , dvec4);",
                "double clamp(double, double, double);",
                "dvec2  clamp(dvec2 , double, double);",
                "dvec3  clamp(dvec3 , double, double);",
                "dvec4  clamp(dvec4 , double, double);",
                "dvec2  clamp(dvec2 , dvec2 , dvec2);",
                "dvec3  clamp(dvec3 , dvec3 , dvec3);",
                "dvec4  clamp(dvec4 , dvec4 , dvec4);",
                "double mix(double, double, double);",
                "dvec2  mix(dvec2,  dvec2,  double);",
                "dvec3  mix(dvec3,  dvec3,  double);",
                "dvec4  mix(dvec4,  dvec4,  double);",
                "dvec2  mix(dvec2,  dvec2,  dvec2);",
                "dvec3  mix(dvec3,  dvec3,  dvec3);",
                "dvec4  mix(dvec4,  dvec4,  dvec4);",
                "double mix(double, double, bool);",
                "dvec2  mix(dvec2,  dvec2,  bvec2);",
                "dvec3  mix(dvec3,  dvec3,  bvec3);",
                "dvec4  mix(dvec4,  dvec4,  bvec4);",
                "double step(double, double);",
                "dvec2  step(dvec2 , dvec2);",
                "dvec3  step(dvec3 , dvec3);",
                "dvec4  step(dvec4 , dvec4);",
                "dvec2  step(double, dvec2);",
                "dvec3  step(double, dvec3);",
                "dvec4  step(double, dvec4);",
                "double smoothstep(double, double, double);",
                "dvec2  smoothstep(dvec2 , dvec2 , dvec2);",
                "dvec3  smoothstep(dvec3 , dvec3 , dvec3);",
                "dvec4  smoothstep(dvec4 , dvec4 , dvec4);",
                "dvec2  smoothstep(double, double, dvec2);",
                "dvec3  smoothstep(double, double, dvec3);",
                "dvec4  smoothstep(double, double, dvec4);",
                "bool  isnan(double);",
                "bvec2 isnan(dvec2);",
                "bvec3 isnan(dvec3);",
                "bvec4 isnan(dvec4);",
                "bool  isinf(double);",
                "bvec2 isinf(dvec2);",
                "bvec3 isinf(dvec3);",
                "bvec4 isinf(dvec4);",
                "double length(double);",
                "double length(dvec2);",
                "double length(dvec3);",
                "double length(dvec4);",
                "double distance(double, double);",
                "double distance(dvec2 , dvec2);",
                "double distance(dvec3 , dvec3);",
                "double distance(dvec4 , dvec4);",
                "double dot(double, double);",
                "double dot(dvec2 , dvec2);",
                "double dot(dvec3 , dvec3);",
                "double dot(dvec4 , dvec4);",
                "dvec3 cross(dvec3, dvec3);",
                "double normalize(double);",
                "dvec2  normalize(dvec2);",
                "dvec3  normalize(dvec3);",
                "dvec4  normalize(dvec4);",
                "double faceforward(double, double, double);",
                "dvec2  faceforward(dvec2,  dvec2,  dvec2);",
                "dvec3  faceforward(dvec3,  dvec3,  dvec3);",
                "dvec4  faceforward(dvec4,  dvec4,  dvec4);",
                "double reflect(double, double);",
                "dvec2  reflect(dvec2 , dvec2 );",
                "dvec3  reflect(dvec3 , dvec3 );",
                "dvec4  reflect(dvec4 , dvec4 );",
                "double refract(double, double, double);",
                "dvec2  refract(dvec2 , dvec2 , double);",
                "dvec3  refract(dvec3 , dvec3 , double);",
                "dvec4  refract(dvec4 , dvec4 , double);",
                "\n",
            ));
        }

        self.common().push_str(concat!(
            "float length(float x);",
            "float length(vec2  x);",
            "float length(vec3  x);",
            "float length(vec4  x);",
            "float distance(float p0, float p1);",
            "float distance(vec2  p0, vec2  p1);",
            "float distance(vec3  p0, vec3  p1);",
            "float distance(vec4  p0, vec4  p1);",
            "float dot(float x, float y);",
            "float dot(vec2  x, vec2  y);",
            "float dot(vec3  x, vec3  y);",
            "float dot(vec4  x, vec4  y);",
            "vec3 cross(vec3 x, vec3 y);",
            "float normalize(float x);",
            "vec2  normalize(vec2  x);",
            "vec3  normalize(vec3  x);",
            "vec4  normalize(vec4  x);",
            "float faceforward(float N, float I, float Nref);",
            "vec2  faceforward(vec2  N, vec2  I, vec2  Nref);",
            "vec3  faceforward(vec3  N, vec3  I, vec3  Nref);",
            "vec4  faceforward(vec4  N, vec4  I, vec4  Nref);",
            "float reflect(float I, float N);",
            "vec2  reflect(vec2  I, vec2  N);",
            "vec3  reflect(vec3  I, vec3  N);",
            "vec4  reflect(vec4  I, vec4  N);",
            "float refract(float I, float N, float eta);",
            "vec2  refract(vec2  I, vec2  N, float eta);",
            "vec3  refract(vec3  I, vec3  N, float eta);",
            "vec4  refract(vec4  I, vec4  N, float eta);",
            "\n",
        ));

        if cfg.include_legacy() {
            self.stage(Stage::Vertex).push_str("vec4 ftransform();");
        }
    }

    pub(crate) fn add_matrix_functions(&mut self, cfg: &Config) {
        self.common().push_str(concat!(
            "mat2 matrixCompMult(mat2 x, mat2 y);",
            "mat3 matrixCompMult(mat3 x, mat3 y);",
            "mat4 matrixCompMult(mat4 x, mat4 y);",
            "\n",
        ));

        if cfg.at_least(300, 120) {
            self.common().push_str(concat!(
                "mat2   outerProduct(vec2 c, vec2 r);",
                "mat3   outerProduct(vec3 c, vec3 r);",
                "mat4   outerProduct(vec4 c, vec4 r);",
                "mat2x3 outerProduct(vec3 c, vec2 r);",
                "mat3x2 outerProduct(vec2 c, vec3 r);",
                "mat2x4 outerProduct(vec4 c, vec2 r);",
                "mat4x2 outerProduct(vec2 c, vec4 r);",
                "mat3x4 outerProduct(vec4 c, vec3 r);",
                "mat4x3 outerProduct(vec3 c, vec4 r);",
                "mat2   transpose(mat2   m);",
                "mat3   transpose(mat3   m);",
                "mat4   transpose(mat4   m);",
                "mat2x3 transpose(mat3x2 m);",
                "mat3x2 transpose(mat2x3 m);",
                "mat2x4 transpose(mat4x2 m);",
                "mat4x2 transpose(mat2x4 m);",
                "mat3x4 transpose(mat4x3 m);",
                "mat4x3 transpose(mat3x4 m);",
                "mat2x3 matrixCompMult(mat2x3, mat2x3);",
                "mat2x4 matrixCompMult(mat2x4, mat2x4);",
                "mat3x2 matrixCompMult(mat3x2, mat3x2);",
                "mat3x4 matrixCompMult(mat3x4, mat3x4);",
                "mat4x2 matrixCompMult(mat4x2, mat4x2);",
                "mat4x3 matrixCompMult(mat4x3, mat4x3);",
                "\n",
            ));
        }

        if cfg.at_least(300, 150) {
            self.common().push_str(concat!(
                "float determinant(mat2 m);",
                "float determinant(mat3 m);",
                "float determinant(mat4 m);",
                "mat2 inverse(mat2 m);",
                "mat3 inverse(mat3 m);",
                "mat4 inverse(mat4 m);",
                "\n",
            ));
        }

        if cfg.desktop_at_least(400) {
            self.common().push_str(concat!(
                "dmat2   matrixCompMult(dmat2,   dmat2);",
                "dmat3   matrixCompMult(dmat3,   dmat3);",
                "dmat4   matrixCompMult(dmat4,   dmat4);",
                "dmat2x3 matrixCompMult(dmat2x3, dmat2x3);",
                "dmat2x4 matrixCompMult(dmat2x4, dmat2x4);",
                "dmat3x2 matrixCompMult(dmat3x2, dmat3x2);",
                "dmat3x4 matrixCompMult(dmat3x4, dmat3x4);",
                "dmat4x2 matrixCompMult(dmat4x2, dmat4x2);",
                "dmat4x3 matrixCompMult(dmat4x3, dmat4x3);",
                "dmat2   outerProduct(dvec2, dvec2);",
                "dmat3   outerProduct(dvec3, dvec3);",
                "dmat4   outerProduct(dvec4, dvec4);",
                "dmat2x3 outerProduct(dvec3, dvec2);",
                "dmat3x2 outerProduct(dvec2, dvec3);",
                "dmat2x4 outerProduct(dvec4, dvec2);",
                "dmat4x2 outerProduct(dvec2, dvec4);",
                "dmat3x4 outerProduct(dvec4, dvec3);",
                "dmat4x3 outerProduct(dvec3, dvec4);",
                "dmat2   transpose(dmat2);",
                "dmat3   transpose(dmat3);",
                "dmat4   transpose(dmat4);",
                "dmat2x3 transpose(dmat3x2);",
                "dmat3x2 transpose(dmat2x3);",
                "dmat2x4 transpose(dmat4x2);",
                "dmat4x2 transpose(dmat2x4);",
                "dmat3x4 transpose(dmat4x3);",
                "dmat4x3 transpose(dmat3x4);",
                "double determinant(dmat2);",
                "double determinant(dmat3);",
                "double determinant(dmat4);",
                "dmat2 inverse(dmat2);",
                "dmat3 inverse(dmat3);",
                "dmat4 inverse(dmat4);",
                "\n",
            ));
        }
    }

    pub(crate) fn add_relational_functions(&mut self, cfg: &Config) {
        self.common().push_str(concat!(
            "bvec2 lessThan(vec2 x, vec2 y);",
            "bvec3 lessThan(vec3 x, vec3 y);",
            "bvec4 lessThan(vec4 x, vec4 y);",
            "bvec2 lessThan(ivec2 x, ivec2 y);",
            "bvec3 lessThan(ivec3 x, ivec3 y);",
            "bvec4 lessThan(ivec4 x, ivec4 y);",
            "bvec2 lessThanEqual(vec2 x, vec2 y);",
            "bvec3 lessThanEqual(vec3 x, vec3 y);",
            "bvec4 lessThanEqual(vec4 x, vec4 y);",
            "bvec2 lessThanEqual(ivec2 x, ivec2 y);",
            "bvec3 lessThanEqual(ivec3 x, ivec3 y);",
            "bvec4 lessThanEqual(ivec4 x, ivec4 y);",
            "bvec2 greaterThan(vec2 x, vec2 y);",
            "bvec3 greaterThan(vec3 x, vec3 y);",
            "bvec4 greaterThan(vec4 x, vec4 y);",
            "bvec2 greaterThan(ivec2 x, ivec2 y);",
            "bvec3 greaterThan(ivec3 x, ivec3 y);",
            "bvec4 greaterThan(ivec4 x, ivec4 y);",
            "bvec2 greaterThanEqual(vec2 x, vec2 y);",
            "bvec3 greaterThanEqual(vec3 x, vec3 y);",
            "bvec4 greaterThanEqual(vec4 x, vec4 y);",
            "bvec2 greaterThanEqual(ivec2 x, ivec2 y);",
            "bvec3 greaterThanEqual(ivec3 x, ivec3 y);",
            "bvec4 greaterThanEqual(ivec4 x, ivec4 y);",
            "bvec2 equal(vec2 x, vec2 y);",
            "bvec3 equal(vec3 x, vec3 y);",
            "bvec4 equal(vec4 x, vec4 y);",
            "bvec2 equal(ivec2 x, ivec2 y);",
            "bvec3 equal(ivec3 x, ivec3 y);",
            "bvec4 equal(ivec4 x, ivec4 y);",
            "bvec2 equal(bvec2 x, bvec2 y);",
            "bvec3 equal(bvec3 x, bvec3 y);",
            "bvec4 equal(bvec4 x, bvec4 y);",
            "bvec2 notEqual(vec2 x, vec2 y);",
            "bvec3 notEqual(vec3 x, vec3 y);",
            "bvec4 notEqual(vec4 x, vec4 y);",
            "bvec2 notEqual(ivec2 x, ivec2 y);",
            "bvec3 notEqual(ivec3 x, ivec3 y);",
            "bvec4 notEqual(ivec4 x, ivec4 y);",
            "bvec2 notEqual(bvec2 x, bvec2 y);",
            "bvec3 notEqual(bvec3 x, bvec3 y);",
            "bvec4 notEqual(bvec4 x, bvec4 y);",
            "bool any(bvec2 x);",
            "bool any(bvec3 x);",
            "bool any(bvec4 x);",
            "bool all(bvec2 x);",
            "bool all(bvec3 x);",
            "bool all(bvec4 x);",
            "bvec2 not(bvec2 x);",
            "bvec3 not(bvec3 x);",
            "bvec4 not(bvec4 x);",
            "\n",
        ));

        if cfg.at_least(300, 130) {
            self.common().push_str(concat!(
                "bvec2 lessThan(uvec2 x, uvec2 y);",
                "bvec3 lessThan(uvec3 x, uvec3 y);",
                "bvec4 lessThan(uvec4 x, uvec4 y);",
                "bvec2 lessThanEqual(uvec2 x, uvec2 y);",
                "bvec3 lessThanEqual(uvec3 x, uvec3 y);",
                "bvec4 lessThanEqual(uvec4 x, uvec4 y);",
                "bvec2 greaterThan(uvec2 x, uvec2 y);",
                "bvec3 greaterThan(uvec3 x, uvec3 y);",
                "bvec4 greaterThan(uvec4 x, uvec4 y);",
                "bvec2 greaterThanEqual(uvec2 x, uvec2 y);",
                "bvec3 greaterThanEqual(uvec3 x, uvec3 y);",
                "bvec4 greaterThanEqual(uvec4 x, uvec4 y);",
                "bvec2 equal(uvec2 x, uvec2 y);",
                "bvec3 equal(uvec3 x, uvec3 y);",
                "bvec4 equal(uvec4 x, uvec4 y);",
                "bvec2 notEqual(uvec2 x, uvec2 y);",
                "bvec3 notEqual(uvec3 x, uvec3 y);",
                "bvec4 notEqual(uvec4 x, uvec4 y);",
                "\n",
            ));
        }

        if cfg.desktop_at_least(400) {
            self.common().push_str(concat!(
                "bvec2 lessThan(dvec2, dvec2);",
                "bvec3 lessThan(dvec3, dvec3);",
                "bvec4 lessThan(dvec4, dvec4);",
                "bvec2 lessThanEqual(dvec2, dvec2);",
                "bvec3 lessThanEqual(dvec3, dvec3);",
                "bvec4 lessThanEqual(dvec4, dvec4);",
                "bvec2 greaterThan(dvec2, dvec2);",
                "bvec3 greaterThan(dvec3, dvec3);",
                "bvec4 greaterThan(dvec4, dvec4);",
                "bvec2 greaterThanEqual(dvec2, dvec2);",
                "bvec3 greaterThanEqual(dvec3, dvec3);",
                "bvec4 greaterThanEqual(dvec4, dvec4);",
                "bvec2 equal(dvec2, dvec2);",
                "bvec3 equal(dvec3, dvec3);",
                "bvec4 equal(dvec4, dvec4);",
                "bvec2 notEqual(dvec2, dvec2);",
                "bvec3 notEqual(dvec3, dvec3);",
                "bvec4 notEqual(dvec4, dvec4);",
                "\n",
            ));
        }
    }

    pub(crate) fn add_atomic_functions(&mut self, cfg: &Config) {
        // atomic counters are a plain-GL feature; Vulkan has none
        if !cfg.target.is_vulkan() && (cfg.desktop_at_least(300) || cfg.es_at_least(310)) {
            self.common().push_str(concat!(
                "uint atomicCounterIncrement(atomic_uint x);",
                "uint atomicCounterDecrement(atomic_uint x);",
                "uint atomicCounter(atomic_uint x);",
                "\n",
            ));
        }

        if cfg.at_least(310, 430) {
            self.common().push_str(concat!(
                "uint atomicAdd(coherent volatile inout uint, uint);",
                " int atomicAdd(coherent volatile inout  int,  int);",
                "uint atomicMin(coherent volatile inout uint, uint);",
                " int atomicMin(coherent volatile inout  int,  int);",
                "uint atomicMax(coherent volatile inout uint, uint);",
                " int atomicMax(coherent volatile inout  int,  int);",
                "uint atomicAnd(coherent volatile inout uint, uint);",
                " int atomicAnd(coherent volatile inout  int,  int);",
                "uint atomicOr (coherent volatile inout uint, uint);",
                " int atomicOr (coherent volatile inout  int,  int);",
                "uint atomicXor(coherent volatile inout uint, uint);",
                " int atomicXor(coherent volatile inout  int,  int);",
                "uint atomicExchange(coherent volatile inout uint, uint);",
                " int atomicExchange(coherent volatile inout  int,  int);",
                "uint atomicCompSwap(coherent volatile inout uint, uint, uint);",
                " int atomicCompSwap(coherent volatile inout  int,  int,  int);",
                "\n",
            ));
        }
    }

    pub(crate) fn add_integer_functions(&mut self, cfg: &Config) {
        if cfg.at_least(310, 400) {
            self.common().push_str(concat!(
                "uint uaddCarry(highp  uint, highp  uint, out lowp  uint carry);",
                "uvec2 uaddCarry(highp uvec2, highp uvec2, out lowp uvec2 carry);",
                "uvec3 uaddCarry(highp uvec3, highp uvec3, out lowp uvec3 carry);",
                "uvec4 uaddCarry(highp uvec4, highp uvec4, out lowp uvec4 carry);",
                "uint usubBorrow(highp  uint, highp  uint, out lowp  uint borrow);",
                "uvec2 usubBorrow(highp uvec2, highp uvec2, out lowp uvec2 borrow);",
                "uvec3 usubBorrow(highp uvec3, highp uvec3, out lowp uvec3 borrow);",
                "uvec4 usubBorrow(highp uvec4, highp uvec4, out lowp uvec4 borrow);",
                "void umulExtended(highp  uint, highp  uint, out highp  uint, out highp  uint lsb);",
                "void umulExtended(highp uvec2, highp uvec2, out highp uvec2, out highp uvec2 lsb);",
                "void umulExtended(highp uvec3, highp uvec3, out highp uvec3, out highp uvec3 lsb);",
                "void umulExtended(highp uvec4, highp uvec4, out highp uvec4, out highp uvec4 lsb);",
                "void imulExtended(highp   int, highp   int, out highp   int, out highp   int lsb);",
                "void imulExtended(highp ivec2, highp ivec2, out highp ivec2, out highp ivec2 lsb);",
                "void imulExtended(highp ivec3, highp ivec3, out highp ivec3, out highp ivec3 lsb);",
                "void imulExtended(highp ivec4, highp ivec4, out highp ivec4, out highp ivec4 lsb);",
                "  int bitfieldExtract(  int, int, int);",
                "ivec2 bitfieldExtract(ivec2, int, int);",
                "ivec3 bitfieldExtract(ivec3, int, int);",
                "ivec4 bitfieldExtract(ivec4, int, int);",
                " uint bitfieldExtract( uint, int, int);",
                "uvec2 bitfieldExtract(uvec2, int, int);",
                "uvec3 bitfieldExtract(uvec3, int, int);",
                "uvec4 bitfieldExtract(uvec4, int, int);",
                "  int bitfieldInsert(  int base,   int, int, int);",
                "ivec2 bitfieldInsert(ivec2 base, ivec2, int, int);",
                "ivec3 bitfieldInsert(ivec3 base, ivec3, int, int);",
                "ivec4 bitfieldInsert(ivec4 base, ivec4, int, int);",
                " uint bitfieldInsert( uint base,  uint, int, int);",
                "uvec2 bitfieldInsert(uvec2 base, uvec2, int, int);",
                "uvec3 bitfieldInsert(uvec3 base, uvec3, int, int);",
                "uvec4 bitfieldInsert(uvec4 base, uvec4, int, int);",
                "\n",
            ));
        }

        if cfg.at_least(310, 400) {
            self.common().push_str(concat!(
                "highp   int bitfieldReverse(highp   int);",
                "highp ivec2 bitfieldReverse(highp ivec2);",
                "highp ivec3 bitfieldReverse(highp ivec3);",
                "highp ivec4 bitfieldReverse(highp ivec4);",
                "highp  uint bitfieldReverse(highp  uint);",
                "highp uvec2 bitfieldReverse(highp uvec2);",
                "highp uvec3 bitfieldReverse(highp uvec3);",
                "highp uvec4 bitfieldReverse(highp uvec4);",
                "  int bitCount(  int);",
                "ivec2 bitCount(ivec2);",
                "ivec3 bitCount(ivec3);",
                "ivec4 bitCount(ivec4);",
                "  int bitCount( uint);",
                "ivec2 bitCount(uvec2);",
                "ivec3 bitCount(uvec3);",
                "ivec4 bitCount(uvec4);",
                "\n",
            ));
        }

        if cfg.desktop_at_least(400) {
            self.common().push_str(concat!(
                "  int findLSB(  int);",
                "ivec2 findLSB(ivec2);",
                "ivec3 findLSB(ivec3);",
                "ivec4 findLSB(ivec4);",
                "  int findLSB( uint);",
                "ivec2 findLSB(uvec2);",
                "ivec3 findLSB(uvec3);",
                "ivec4 findLSB(uvec4);",
                "  int findMSB(highp   int);",
                "ivec2 findMSB(highp ivec2);",
                "ivec3 findMSB(highp ivec3);",
                "ivec4 findMSB(highp ivec4);",
                "  int findMSB(highp  uint);",
                "ivec2 findMSB(highp uvec2);",
                "ivec3 findMSB(highp uvec3);",
                "ivec4 findMSB(highp uvec4);",
                "\n",
            ));
        } else if cfg.es_at_least(310) {
            self.common().push_str(concat!(
                "lowp   int findLSB(  int);",
                "lowp ivec2 findLSB(ivec2);",
                "lowp ivec3 findLSB(ivec3);",
                "lowp ivec4 findLSB(ivec4);",
                "lowp   int findLSB( uint);",
                "lowp ivec2 findLSB(uvec2);",
                "lowp ivec3 findLSB(uvec3);",
                "lowp ivec4 findLSB(uvec4);",
                "lowp   int findMSB(highp   int);",
                "lowp ivec2 findMSB(highp ivec2);",
                "lowp ivec3 findMSB(highp ivec3);",
                "lowp ivec4 findMSB(highp ivec4);",
                "lowp   int findMSB(highp  uint);",
                "lowp ivec2 findMSB(highp uvec2);",
                "lowp ivec3 findMSB(highp uvec3);",
                "lowp ivec4 findMSB(highp uvec4);",
                "\n",
            ));
        }
    }

    /// Original-style texture functions. The non-bias forms are shared;
    /// bias forms are fragment-only, and the explicit-lod forms are
    /// vertex-only on ES 100.
    pub(crate) fn add_legacy_texture_functions(&mut self, cfg: &Config) {
        if cfg.target.targets_binary() {
            return;
        }

        if cfg.legacy_texture() {
            self.common().push_str(concat!(
                "vec4 texture2D(sampler2D, vec2);",
                "vec4 texture2DProj(sampler2D, vec3);",
                "vec4 texture2DProj(sampler2D, vec4);",
                "vec4 texture3D(sampler3D, vec3);",
                "vec4 texture3DProj(sampler3D, vec4);",
                "vec4 textureCube(samplerCube, vec3);",
                "\n",
            ));
        }

        if cfg.desktop() && cfg.legacy_texture() {
            self.common().push_str(concat!(
                "vec4 texture1D(sampler1D, float);",
                "vec4 texture1DProj(sampler1D, vec2);",
                "vec4 texture1DProj(sampler1D, vec4);",
                "vec4 shadow1D(sampler1DShadow, vec3);",
                "vec4 shadow2D(sampler2DShadow, vec3);",
                "vec4 shadow1DProj(sampler1DShadow, vec4);",
                "vec4 shadow2DProj(sampler2DShadow, vec4);",
                "vec4 texture2DRect(sampler2DRect, vec2);",
                "vec4 texture2DRectProj(sampler2DRect, vec3);",
                "vec4 texture2DRectProj(sampler2DRect, vec4);",
                "vec4 shadow2DRect(sampler2DRectShadow, vec3);",
                "vec4 shadow2DRectProj(sampler2DRectShadow, vec4);",
                "\n",
            ));
        }

        // explicit-lod forms: vertex-only on ES 100, common otherwise
        if cfg.legacy_texture() {
            let text = concat!(
                "vec4 texture2DLod(sampler2D, vec2, float);",
                "vec4 texture2DProjLod(sampler2D, vec3, float);",
                "vec4 texture2DProjLod(sampler2D, vec4, float);",
                "vec4 texture3DLod(sampler3D, vec3, float);",
                "vec4 texture3DProjLod(sampler3D, vec4, float);",
                "vec4 textureCubeLod(samplerCube, vec3, float);",
                "\n",
            );
            if cfg.version == 100 {
                self.stage(Stage::Vertex).push_str(text);
            } else {
                self.common().push_str(text);
            }
        }
        if cfg.desktop() && cfg.legacy_texture() {
            self.common().push_str(concat!(
                "vec4 texture1DLod(sampler1D, float, float);",
                "vec4 texture1DProjLod(sampler1D, vec2, float);",
                "vec4 texture1DProjLod(sampler1D, vec4, float);",
                "vec4 shadow1DLod(sampler1DShadow, vec3, float);",
                "vec4 shadow2DLod(sampler2DShadow, vec3, float);",
                "vec4 shadow1DProjLod(sampler1DShadow, vec4, float);",
                "vec4 shadow2DProjLod(sampler2DShadow, vec4, float);",
                "vec4 texture1DGradARB(sampler1D, float, float, float);",
                "vec4 texture1DProjGradARB(sampler1D, vec2, float, float);",
                "vec4 texture1DProjGradARB(sampler1D, vec4, float, float);",
                "vec4 texture2DGradARB(sampler2D, vec2, vec2, vec2);",
                "vec4 texture2DProjGradARB(sampler2D, vec3, vec2, vec2);",
                "vec4 texture2DProjGradARB(sampler2D, vec4, vec2, vec2);",
                "vec4 texture3DGradARB(sampler3D, vec3, vec3, vec3);",
                "vec4 texture3DProjGradARB(sampler3D, vec4, vec3, vec3);",
                "vec4 textureCubeGradARB(samplerCube, vec3, vec3, vec3);",
                "vec4 shadow1DGradARB(sampler1DShadow, vec3, float, float);",
                "vec4 shadow1DProjGradARB(sampler1DShadow, vec4, float, float);",
                "vec4 shadow2DGradARB(sampler2DShadow, vec3, vec2, vec2);",
                "vec4 shadow2DProjGradARB(sampler2DShadow, vec4, vec2, vec2);",
                "vec4 texture2DRectGradARB(sampler2DRect, vec2, vec2, vec2);",
                "vec4 texture2DRectProjGradARB(sampler2DRect, vec3, vec2, vec2);",
                "vec4 texture2DRectProjGradARB(sampler2DRect, vec4, vec2, vec2);",
                "vec4 shadow2DRectGradARB(sampler2DRectShadow, vec3, vec2, vec2);",
                "vec4 shadow2DRectProjGradARB(sampler2DRectShadow, vec4, vec2, vec2);",
                "\n",
            ));
        }

        // bias forms, fragment only
        if cfg.desktop() || cfg.version == 100 {
            self.stage(Stage::Fragment).push_str(concat!(
                "vec4 texture2D(sampler2D, vec2, float);",
                "vec4 texture2DProj(sampler2D, vec3, float);",
                "vec4 texture2DProj(sampler2D, vec4, float);",
                "vec4 texture3D(sampler3D, vec3, float);",
                "vec4 texture3DProj(sampler3D, vec4, float);",
                "vec4 textureCube(samplerCube, vec3, float);",
                "\n",
            ));
        }
        if cfg.desktop() && cfg.version > 100 {
            self.stage(Stage::Fragment).push_str(concat!(
                "vec4 texture1D(sampler1D, float, float);",
                "vec4 texture1DProj(sampler1D, vec2, float);",
                "vec4 texture1DProj(sampler1D, vec4, float);",
                "vec4 shadow1D(sampler1DShadow, vec3, float);",
                "vec4 shadow2D(sampler2DShadow, vec3, float);",
                "vec4 shadow1DProj(sampler1DShadow, vec4, float);",
                "vec4 shadow2DProj(sampler2DShadow, vec4, float);",
                "\n",
            ));
        }
        if cfg.es() {
            self.stage(Stage::Fragment).push_str(concat!(
                "vec4 texture2DLodEXT(sampler2D, vec2, float);",
                "vec4 texture2DProjLodEXT(sampler2D, vec3, float);",
                "vec4 texture2DProjLodEXT(sampler2D, vec4, float);",
                "vec4 textureCubeLodEXT(samplerCube, vec3, float);",
                "\n",
            ));
            self.common().push_str(concat!(
                "vec4 texture2DGradEXT(sampler2D, vec2, vec2, vec2);",
                "vec4 texture2DProjGradEXT(sampler2D, vec3, vec2, vec2);",
                "vec4 texture2DProjGradEXT(sampler2D, vec4, vec2, vec2);",
                "vec4 textureCubeGradEXT(samplerCube, vec3, vec3, vec3);",
                "\n",
            ));
        }
    }

    pub(crate) fn add_noise_functions(&mut self, cfg: &Config) {
        if cfg.es() {
            return;
        }
        self.common().push_str(concat!(
            "float noise1(float x);",
            "float noise1(vec2  x);",
            "float noise1(vec3  x);",
            "float noise1(vec4  x);",
            "vec2 noise2(float x);",
            "vec2 noise2(vec2  x);",
            "vec2 noise2(vec3  x);",
            "vec2 noise2(vec4  x);",
            "vec3 noise3(float x);",
            "vec3 noise3(vec2  x);",
            "vec3 noise3(vec3  x);",
            "vec3 noise3(vec4  x);",
            "vec4 noise4(float x);",
            "vec4 noise4(vec2  x);",
            "vec4 noise4(vec3  x);",
            "vec4 noise4(vec4  x);",
            "\n",
        ));
    }

    pub(crate) fn add_geometry_functions(&mut self, cfg: &Config) {
        if !cfg.at_least(310, 150) {
            return;
        }
        if cfg.desktop_at_least(400) {
            self.stage(Stage::Geometry).push_str(concat!(
                "void EmitStreamVertex(int);",
                "void EndStreamPrimitive(int);",
            ));
        }
        self.stage(Stage::Geometry).push_str(concat!(
            "void EmitVertex();",
            "void EndPrimitive();",
            "\n",
        ));
    }

    pub(crate) fn add_control_functions(&mut self, cfg: &Config) {
        let es_barrier = cfg.es_at_least(310);
        if cfg.desktop_at_least(150) || es_barrier {
            self.stage(Stage::TessControl).push_str("void barrier();");
        }
        if cfg.desktop_at_least(420) || es_barrier {
            self.stage(Stage::Compute).push_str("void barrier();");
        }
        if cfg.desktop_at_least(130) || es_barrier {
            self.common().push_str("void memoryBarrier();");
        }
        if cfg.desktop_at_least(420) || es_barrier {
            self.common().push_str(concat!(
                "void memoryBarrierAtomicCounter();",
                "void memoryBarrierBuffer();",
                "void memoryBarrierImage();",
            ));
            self.stage(Stage::Compute).push_str(concat!(
                "void memoryBarrierShared();",
                "void groupMemoryBarrier();",
                "\n",
            ));
        }
        self.common().push_str("\n");
    }

    pub(crate) fn add_fragment_functions(&mut self, cfg: &Config) {
        self.stage(Stage::Fragment).push_str(concat!(
            "float dFdx(float p);",
            "vec2  dFdx(vec2  p);",
            "vec3  dFdx(vec3  p);",
            "vec4  dFdx(vec4  p);",
            "float dFdy(float p);",
            "vec2  dFdy(vec2  p);",
            "vec3  dFdy(vec3  p);",
            "vec4  dFdy(vec4  p);",
            "float fwidth(float p);",
            "vec2  fwidth(vec2  p);",
            "vec3  fwidth(vec3  p);",
            "vec4  fwidth(vec4  p);",
            "\n",
        ));

        if cfg.desktop_at_least(400) {
            self.stage(Stage::Fragment).push_str(concat!(
                "float dFdxFine(float p);",
                "vec2  dFdxFine(vec2  p);",
                "vec3  dFdxFine(vec3  p);",
                "vec4  dFdxFine(vec4  p);",
                "float dFdyFine(float p);",
                "vec2  dFdyFine(vec2  p);",
                "vec3  dFdyFine(vec3  p);",
                "vec4  dFdyFine(vec4  p);",
                "float fwidthFine(float p);",
                "vec2  fwidthFine(vec2  p);",
                "vec3  fwidthFine(vec3  p);",
                "vec4  fwidthFine(vec4  p);",
                "float dFdxCoarse(float p);",
                "vec2  dFdxCoarse(vec2  p);",
                "vec3  dFdxCoarse(vec3  p);",
                "vec4  dFdxCoarse(vec4  p);",
                "float dFdyCoarse(float p);",
                "vec2  dFdyCoarse(vec2  p);",
                "vec3  dFdyCoarse(vec3  p);",
                "vec4  dFdyCoarse(vec4  p);",
                "float fwidthCoarse(float p);",
                "vec2  fwidthCoarse(vec2  p);",
                "vec3  fwidthCoarse(vec3  p);",
                "vec4  fwidthCoarse(vec4  p);",
                "\n",
            ));
        }

        if cfg.at_least(310, 400) {
            self.stage(Stage::Fragment).push_str(concat!(
                "float interpolateAtCentroid(float);",
                "vec2  interpolateAtCentroid(vec2);",
                "vec3  interpolateAtCentroid(vec3);",
                "vec4  interpolateAtCentroid(vec4);",
                "float interpolateAtSample(float, int);",
                "vec2  interpolateAtSample(vec2,  int);",
                "vec3  interpolateAtSample(vec3,  int);",
                "vec4  interpolateAtSample(vec4,  int);",
                "float interpolateAtOffset(float, vec2);",
                "vec2  interpolateAtOffset(vec2,  vec2);",
                "vec3  interpolateAtOffset(vec3,  vec2);",
                "vec4  interpolateAtOffset(vec4,  vec2);",
                "\n",
            ));
        }
    }

    pub(crate) fn add_depth_range(&mut self, cfg: &Config) {
        if cfg.es() {
            self.common().push_str(concat!(
                "struct gl_DepthRangeParameters {",
                "highp float near;",
                "highp float far;",
                "highp float diff;",
                "};",
                "uniform gl_DepthRangeParameters gl_DepthRange;",
                "\n",
            ));
        } else {
            self.common().push_str(concat!(
                "struct gl_DepthRangeParameters {",
                "float near;",
                "float far;",
                "float diff;",
                "};",
                "uniform gl_DepthRangeParameters gl_DepthRange;",
                "\n",
            ));
        }
    }
}
